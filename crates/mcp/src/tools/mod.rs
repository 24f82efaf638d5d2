pub mod bills;
pub mod datasets;
pub mod documents;
pub mod monitor;
pub mod people;
pub mod search;
pub mod sessions;
mod registry;

pub use bills::{FindBillByNumberTool, GetBillTool, GetMasterListRawTool, GetMasterListTool, GetRollCallTool};
pub use datasets::{GetDatasetListTool, GetDatasetTool};
pub use documents::GetDocumentTool;
pub use monitor::{GetMonitorListTool, SetMonitorTool};
pub use people::{
    FindLegislatorTool, GetLegislatorVotesTool, GetPersonTool, GetPrimaryAuthoredTool,
    GetSessionPeopleTool, GetSponsoredListTool,
};
pub use registry::{
    json_schema_boolean, json_schema_enum, json_schema_integer, json_schema_object,
    json_schema_state, json_schema_string, parse_arguments, Tool, ToolRegistry, ToolTier,
};
pub use search::SearchTool;
pub use sessions::GetSessionListTool;

use legiscan_sdk::LegiScanClient;
use std::sync::Arc;

/// Registry holding every LegiScan tool, sharing one client.
pub fn build_registry(client: &LegiScanClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // Sessions and bills
    registry.register(Arc::new(GetSessionListTool::new(client.clone())));
    registry.register(Arc::new(GetMasterListTool::new(client.clone())));
    registry.register(Arc::new(GetMasterListRawTool::new(client.clone())));
    registry.register(Arc::new(GetBillTool::new(client.clone())));
    registry.register(Arc::new(FindBillByNumberTool::new(client.clone())));
    registry.register(Arc::new(GetRollCallTool::new(client.clone())));

    // Documents
    registry.register(Arc::new(GetDocumentTool::bill_text(client.clone())));
    registry.register(Arc::new(GetDocumentTool::amendment(client.clone())));
    registry.register(Arc::new(GetDocumentTool::supplement(client.clone())));

    // People
    registry.register(Arc::new(GetPersonTool::new(client.clone())));
    registry.register(Arc::new(FindLegislatorTool::new(client.clone())));
    registry.register(Arc::new(GetSessionPeopleTool::new(client.clone())));
    registry.register(Arc::new(GetSponsoredListTool::new(client.clone())));
    registry.register(Arc::new(GetLegislatorVotesTool::new(client.clone())));
    registry.register(Arc::new(GetPrimaryAuthoredTool::new(client.clone())));

    // Search
    registry.register(Arc::new(SearchTool::new(client.clone())));
    registry.register(Arc::new(SearchTool::raw(client.clone())));

    // Datasets
    registry.register(Arc::new(GetDatasetListTool::new(client.clone())));
    registry.register(Arc::new(GetDatasetTool::new(client.clone())));

    // Monitor list
    registry.register(Arc::new(GetMonitorListTool::new(client.clone())));
    registry.register(Arc::new(GetMonitorListTool::raw(client.clone())));
    registry.register(Arc::new(SetMonitorTool::new(client.clone())));

    registry
}
