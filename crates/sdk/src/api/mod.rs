//! API endpoint modules, one per LegiScan resource family.

mod bills;
mod datasets;
mod documents;
mod monitor;
mod people;
mod search;
mod sessions;
mod votes;

pub use bills::BillsApi;
pub use datasets::DatasetsApi;
pub use documents::DocumentsApi;
pub use monitor::MonitorApi;
pub use people::{
    AuthoredBill, LegislatorMatches, PeopleApi, PrimaryAuthored, DEFAULT_PRIMARY_CHECKS,
    MAX_PRIMARY_CHECKS,
};
pub use search::{SearchApi, SearchQuery, SearchScope};
pub use sessions::{select_current_session, SessionsApi};
pub use votes::{LegislatorVote, LegislatorVotes, VotesApi, MAX_ROLL_CALLS};

use crate::transport::Params;
use legiscan_core::{StateCode, ValidationError};

/// Where a session-scoped operation looks: an explicit session, or the
/// current session of a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Session(u64),
    State(StateCode),
}

impl Scope {
    /// Build a scope from optional caller input. An explicit session wins.
    pub fn from_parts(
        session_id: Option<u64>,
        state: Option<StateCode>,
    ) -> Result<Self, ValidationError> {
        match (session_id, state) {
            (Some(id), _) => Ok(Self::Session(id)),
            (None, Some(state)) => Ok(Self::State(state)),
            (None, None) => Err(ValidationError::MissingScope),
        }
    }

    pub(crate) fn params(&self) -> Params {
        match self {
            Self::Session(id) => Params::new().with("id", id),
            Self::State(state) => Params::new().with("state", state),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Session(id) => write!(f, "session {id}"),
            Self::State(state) => write!(f, "the current {state} session"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_prefers_session() {
        let state = StateCode::parse("CA").unwrap();

        assert_eq!(
            Scope::from_parts(Some(2172), Some(state.clone())).unwrap(),
            Scope::Session(2172)
        );
        assert_eq!(
            Scope::from_parts(None, Some(state.clone())).unwrap(),
            Scope::State(state)
        );
        assert_eq!(
            Scope::from_parts(None, None).unwrap_err(),
            ValidationError::MissingScope
        );
    }

    #[test]
    fn test_scope_params() {
        assert_eq!(Scope::Session(7).params().get("id"), Some("7"));

        let params = Scope::State(StateCode::parse("tx").unwrap()).params();
        assert_eq!(params.get("state"), Some("TX"));
        assert_eq!(params.get("id"), None);
    }
}
