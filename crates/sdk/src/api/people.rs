//! People API endpoints.

use super::Scope;
use crate::client::LegiScanClient;
use crate::error::LegiScanResult;
use crate::transport::Params;
use legiscan_core::validate::non_empty;
use legiscan_core::{Bill, Person, Session, SessionPeople, SponsoredBills, ValidationError};
use serde::Serialize;
use tracing::debug;

/// Bills checked per primary-authorship lookup, unless the caller asks for fewer.
pub const DEFAULT_PRIMARY_CHECKS: usize = 10;
/// Upper bound on bills checked per primary-authorship lookup.
pub const MAX_PRIMARY_CHECKS: usize = 25;

/// People API for legislators, session rosters and sponsorships.
pub struct PeopleApi<'a> {
    client: &'a LegiScanClient,
}

/// Result of a legislator name lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LegislatorMatches {
    /// Session whose roster was searched; `None` when the state has no sessions.
    pub session: Option<Session>,
    pub people: Vec<Person>,
}

/// Bills a legislator is the primary author of.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrimaryAuthored {
    pub sponsor: Person,
    /// Sponsored bills in scope, before the limit.
    pub sponsored: usize,
    /// Bills whose sponsor list was fetched.
    pub checked: usize,
    pub bills: Vec<AuthoredBill>,
}

/// Summary of a primary-authored bill.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthoredBill {
    pub bill_id: u64,
    pub session_id: u64,
    pub bill_number: String,
    pub title: String,
    pub status: u32,
    pub status_date: String,
    pub url: String,
}

impl From<Bill> for AuthoredBill {
    fn from(bill: Bill) -> Self {
        Self {
            bill_id: bill.bill_id,
            session_id: bill.session_id,
            bill_number: bill.bill_number,
            title: bill.title,
            status: bill.status,
            status_date: bill.status_date,
            url: bill.url,
        }
    }
}

impl<'a> PeopleApi<'a> {
    pub(crate) fn new(client: &'a LegiScanClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, people_id: u64) -> LegiScanResult<Person> {
        self.client
            .http
            .fetch("getPerson", Params::new().with("id", people_id), "person")
            .await
    }

    /// Every legislator active in a session.
    pub async fn session_people(&self, session_id: u64) -> LegiScanResult<SessionPeople> {
        self.client
            .http
            .fetch(
                "getSessionPeople",
                Params::new().with("id", session_id),
                "sessionpeople",
            )
            .await
    }

    /// Bills sponsored by a legislator, with the sponsor and their sessions.
    pub async fn sponsored_list(&self, people_id: u64) -> LegiScanResult<SponsoredBills> {
        self.client
            .http
            .fetch(
                "getSponsoredList",
                Params::new().with("id", people_id),
                "sponsoredbills",
            )
            .await
    }

    /// Find legislators by name in a session roster.
    ///
    /// A state scope resolves the state's current session first, so this
    /// makes at most two requests.
    pub async fn find_legislator(
        &self,
        scope: &Scope,
        name: &str,
    ) -> LegiScanResult<LegislatorMatches> {
        non_empty("name", name)?;

        let session_id = match scope {
            Scope::Session(id) => *id,
            Scope::State(state) => match self.client.sessions().current(state).await? {
                Some(session) => session.session_id,
                None => return Ok(LegislatorMatches::default()),
            },
        };

        let roster = self.session_people(session_id).await?;
        let people: Vec<Person> = roster
            .people
            .into_iter()
            .filter(|person| person.matches_name(name))
            .collect();

        debug!(%scope, session_id, matches = people.len(), "Legislator lookup");
        Ok(LegislatorMatches {
            session: Some(roster.session),
            people,
        })
    }

    /// Sponsored bills where the legislator is the primary author.
    ///
    /// The sponsored list does not say who is primary, so the first `limit`
    /// bills (optionally within one session) are fetched one at a time and
    /// their sponsor lists checked.
    pub async fn primary_authored(
        &self,
        people_id: u64,
        session_id: Option<u64>,
        limit: usize,
    ) -> LegiScanResult<PrimaryAuthored> {
        if limit == 0 || limit > MAX_PRIMARY_CHECKS {
            return Err(ValidationError::Limit {
                max: MAX_PRIMARY_CHECKS,
            }
            .into());
        }

        let sponsored = self.sponsored_list(people_id).await?;
        let candidates: Vec<u64> = sponsored
            .bills
            .iter()
            .filter(|bill| session_id.map_or(true, |id| bill.session_id == id))
            .map(|bill| bill.bill_id)
            .collect();

        let mut bills = Vec::new();
        let mut checked = 0;
        for bill_id in candidates.iter().take(limit) {
            let bill = self.client.bills().get(*bill_id).await?;
            checked += 1;

            let is_primary = bill
                .sponsors
                .iter()
                .any(|sponsor| sponsor.people_id == people_id && sponsor.is_primary());
            if is_primary {
                bills.push(AuthoredBill::from(bill));
            }
        }

        debug!(
            people_id,
            sponsored = candidates.len(),
            checked,
            primary = bills.len(),
            "Primary authorship lookup"
        );
        Ok(PrimaryAuthored {
            sponsor: sponsored.sponsor,
            sponsored: candidates.len(),
            checked,
            bills,
        })
    }
}
