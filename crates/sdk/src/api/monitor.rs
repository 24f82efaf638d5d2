//! GAITS monitor list endpoints.

use crate::client::LegiScanClient;
use crate::error::LegiScanResult;
use crate::transport::Params;
use legiscan_core::reshape::{collect_records, BILL_ID};
use legiscan_core::{BillIdList, MonitorAction, MonitorEntry, MonitorRawEntry, MonitorRecord, Stance};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::info;

/// Monitor API for the account's tracked bills.
pub struct MonitorApi<'a> {
    client: &'a LegiScanClient,
}

impl<'a> MonitorApi<'a> {
    pub(crate) fn new(client: &'a LegiScanClient) -> Self {
        Self { client }
    }

    /// Tracked bills with status and last action. Defaults to current bills.
    pub async fn list(&self, record: Option<MonitorRecord>) -> LegiScanResult<Vec<MonitorEntry>> {
        self.keyed_list("getMonitorList", record).await
    }

    /// Tracked bills with only ID, stance and change hash.
    pub async fn list_raw(
        &self,
        record: Option<MonitorRecord>,
    ) -> LegiScanResult<Vec<MonitorRawEntry>> {
        self.keyed_list("getMonitorListRaw", record).await
    }

    /// Add, remove or re-stance bills. Returns the upstream status per bill ID.
    pub async fn set(
        &self,
        bills: &BillIdList,
        action: MonitorAction,
        stance: Option<Stance>,
    ) -> LegiScanResult<BTreeMap<String, String>> {
        let params = Params::new()
            .with("list", bills.as_param())
            .with("action", action.as_str())
            .with_opt("stance", stance.map(|s| s.as_str()));

        let result = self
            .client
            .http
            .fetch("setMonitor", params, "return")
            .await?;

        info!(
            action = action.as_str(),
            bills = bills.ids().len(),
            "Monitor list updated"
        );
        Ok(result)
    }

    async fn keyed_list<T: DeserializeOwned>(
        &self,
        op: &str,
        record: Option<MonitorRecord>,
    ) -> LegiScanResult<Vec<T>> {
        let params = Params::new().with_opt("record", record.map(|r| r.as_param()));
        let monitorlist = self
            .client
            .http
            .fetch_value(op, params, "monitorlist")
            .await?;

        Ok(collect_records(monitorlist, BILL_ID))
    }
}
