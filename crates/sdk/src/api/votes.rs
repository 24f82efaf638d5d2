//! Votes API endpoints.

use crate::client::LegiScanClient;
use crate::error::LegiScanResult;
use crate::transport::Params;
use legiscan_core::{IndividualVote, RollCall, VoteValue};
use serde::Serialize;
use tracing::debug;

/// Roll calls fetched per legislator-votes lookup.
pub const MAX_ROLL_CALLS: usize = 25;

pub struct VotesApi<'a> {
    client: &'a LegiScanClient,
}

/// How one legislator voted across a bill's roll calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LegislatorVotes {
    pub people_id: u64,
    pub bill_id: u64,
    pub bill_number: String,
    pub title: String,
    pub votes: Vec<LegislatorVote>,
    /// The bill has more than [`MAX_ROLL_CALLS`] roll calls; later ones were not fetched.
    pub truncated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LegislatorVote {
    pub roll_call_id: u64,
    pub date: String,
    pub desc: String,
    pub chamber: String,
    pub passed: bool,
    /// `None` when the legislator is not on the roll call.
    pub vote: Option<VoteValue>,
    pub vote_text: String,
}

impl<'a> VotesApi<'a> {
    pub(crate) fn new(client: &'a LegiScanClient) -> Self {
        Self { client }
    }

    /// A roll call with tallies and every legislator's vote.
    pub async fn roll_call(&self, roll_call_id: u64) -> LegiScanResult<RollCall> {
        self.client
            .http
            .fetch(
                "getRollCall",
                Params::new().with("id", roll_call_id),
                "roll_call",
            )
            .await
    }

    /// A legislator's vote on every roll call of a bill.
    ///
    /// Fetches the bill, then each of its roll calls in order, one request at
    /// a time and at most [`MAX_ROLL_CALLS`] of them.
    pub async fn legislator_votes(
        &self,
        people_id: u64,
        bill_id: u64,
    ) -> LegiScanResult<LegislatorVotes> {
        let bill = self.client.bills().get(bill_id).await?;
        let truncated = bill.votes.len() > MAX_ROLL_CALLS;

        let mut votes = Vec::new();
        for reference in bill.votes.iter().take(MAX_ROLL_CALLS) {
            let roll_call = self.roll_call(reference.roll_call_id).await?;
            let cast = roll_call.votes.iter().find(|v| v.people_id == people_id);
            let vote = cast.and_then(IndividualVote::value);
            let vote_text = cast.map(|v| v.vote_text.clone()).unwrap_or_default();

            votes.push(LegislatorVote {
                roll_call_id: reference.roll_call_id,
                date: roll_call.date,
                desc: roll_call.desc,
                chamber: roll_call.chamber,
                passed: roll_call.passed != 0,
                vote,
                vote_text,
            });
        }

        debug!(
            people_id,
            bill_id,
            roll_calls = votes.len(),
            truncated,
            "Legislator votes lookup"
        );
        Ok(LegislatorVotes {
            people_id,
            bill_id,
            bill_number: bill.bill_number,
            title: bill.title,
            votes,
            truncated,
        })
    }
}
