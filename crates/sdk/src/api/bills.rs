//! Bills API endpoints.

use super::Scope;
use crate::client::LegiScanClient;
use crate::error::LegiScanResult;
use crate::transport::Params;
use legiscan_core::reshape::{collect_records, BILL_ID};
use legiscan_core::{bill_number, Bill, MasterListItem, MasterListRawItem};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Bills API for master lists and bill detail.
pub struct BillsApi<'a> {
    client: &'a LegiScanClient,
}

impl<'a> BillsApi<'a> {
    pub(crate) fn new(client: &'a LegiScanClient) -> Self {
        Self { client }
    }

    /// Every bill in a session, with title, status and last action.
    pub async fn master_list(&self, scope: &Scope) -> LegiScanResult<Vec<MasterListItem>> {
        self.keyed_master_list("getMasterList", scope).await
    }

    /// Every bill in a session, with only ID, number and change hash.
    pub async fn master_list_raw(&self, scope: &Scope) -> LegiScanResult<Vec<MasterListRawItem>> {
        self.keyed_master_list("getMasterListRaw", scope).await
    }

    /// Full bill detail.
    pub async fn get(&self, bill_id: u64) -> LegiScanResult<Bill> {
        self.client
            .http
            .fetch("getBill", Params::new().with("id", bill_id), "bill")
            .await
    }

    /// Find a bill by its printed number (`"AB 858"`, `"ab858"`, `"AB-0858"`).
    ///
    /// Returns `None` when no bill in the scope matches.
    pub async fn find_by_number(
        &self,
        scope: &Scope,
        number: &str,
    ) -> LegiScanResult<Option<MasterListItem>> {
        legiscan_core::validate::non_empty("bill_number", number)?;

        let wanted = bill_number::normalize(number);
        let found = self
            .master_list(scope)
            .await?
            .into_iter()
            .find(|item| bill_number::normalize(&item.number) == wanted);

        debug!(%scope, number = %wanted, found = found.is_some(), "Bill lookup");
        Ok(found)
    }

    async fn keyed_master_list<T: DeserializeOwned>(
        &self,
        op: &str,
        scope: &Scope,
    ) -> LegiScanResult<Vec<T>> {
        let masterlist = self
            .client
            .http
            .fetch_value(op, scope.params(), "masterlist")
            .await?;

        Ok(collect_records(masterlist, BILL_ID))
    }
}
