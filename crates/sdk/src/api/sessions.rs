//! Sessions API endpoints.

use crate::client::LegiScanClient;
use crate::error::LegiScanResult;
use crate::transport::Params;
use legiscan_core::{Session, StateCode};

/// Sessions API for listing legislative sessions.
pub struct SessionsApi<'a> {
    client: &'a LegiScanClient,
}

impl<'a> SessionsApi<'a> {
    pub(crate) fn new(client: &'a LegiScanClient) -> Self {
        Self { client }
    }

    /// List sessions for one state, or for every state when `state` is `None`.
    pub async fn list(&self, state: Option<&StateCode>) -> LegiScanResult<Vec<Session>> {
        let params = Params::new().with_opt("state", state);
        self.client
            .http
            .fetch("getSessionList", params, "sessions")
            .await
    }

    /// Resolve the current session of a state.
    pub async fn current(&self, state: &StateCode) -> LegiScanResult<Option<Session>> {
        let sessions = self.list(Some(state)).await?;
        Ok(select_current_session(sessions))
    }
}

/// Pick the session a state is currently sitting in.
///
/// Sessions not flagged as prior are preferred; among them the latest start
/// year wins, a regular session beats a special one of the same year, and the
/// higher session ID breaks remaining ties.
pub fn select_current_session(sessions: Vec<Session>) -> Option<Session> {
    let (active, prior): (Vec<_>, Vec<_>) = sessions.into_iter().partition(|s| !s.is_prior());
    let candidates = if active.is_empty() { prior } else { active };

    candidates
        .into_iter()
        .max_by_key(|s| (s.year_start, !s.is_special(), s.session_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::client;
    use serde_json::json;
    use wiremock::matchers::{method, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session(id: u64, year: u16, special: u8, prior: u8) -> Session {
        Session {
            session_id: id,
            year_start: year,
            special,
            prior,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_for_state() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getSessionList"))
            .and(query_param("state", "CA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "sessions": [
                    {
                        "session_id": 2172,
                        "state_id": 5,
                        "year_start": 2025,
                        "year_end": 2026,
                        "session_name": "2025-2026 Regular Session",
                        "dataset_hash": "abc"
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let state = StateCode::parse("ca").unwrap();
        let sessions = client(&server).sessions().list(Some(&state)).await.unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].session_id, 2172);
        assert_eq!(sessions[0].session_name, "2025-2026 Regular Session");
    }

    #[tokio::test]
    async fn test_list_all_states_omits_state() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getSessionList"))
            .and(query_param_is_missing("state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "sessions": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let sessions = client(&server).sessions().list(None).await.unwrap();
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_select_current_prefers_latest_regular() {
        let picked = select_current_session(vec![
            session(1, 2023, 0, 1),
            session(2, 2025, 1, 0),
            session(3, 2025, 0, 0),
            session(4, 2024, 0, 0),
        ])
        .unwrap();
        assert_eq!(picked.session_id, 3);
    }

    #[test]
    fn test_select_current_falls_back_to_prior() {
        let picked =
            select_current_session(vec![session(1, 2021, 0, 1), session(2, 2023, 0, 1)]).unwrap();
        assert_eq!(picked.session_id, 2);

        assert!(select_current_session(Vec::new()).is_none());
    }
}
