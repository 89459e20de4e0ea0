use contracts::domain::datastore::{CreateDataStoreRequest, DataStore};

use crate::shared::api_utils::{fire_and_forget, item_path, ApiRequest};
use crate::shared::selection::SelectionSet;

/// Fetch storage pools, hiding the per-instance ones
pub async fn fetch_datastores() -> Result<Vec<DataStore>, String> {
    let all: Vec<DataStore> = ApiRequest::get("/api/datastore").fetch_json().await?;
    Ok(visible(all))
}

fn visible(all: Vec<DataStore>) -> Vec<DataStore> {
    all.into_iter().filter(|d| !d.is_domain_pool()).collect()
}

/// Datastores are identified by name rather than uuid.
#[derive(Debug, Clone, Default)]
pub struct DataStoreApi {
    names: SelectionSet,
}

impl DataStoreApi {
    pub fn new(names: SelectionSet) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &SelectionSet {
        &self.names
    }

    pub fn delete_requests(&self) -> Vec<ApiRequest> {
        self.names
            .iter()
            .map(|name| ApiRequest::delete(item_path("datastore", name)))
            .collect()
    }

    pub fn delete(&self) {
        fire_and_forget(self.delete_requests());
    }

    pub fn create(&self, data: &CreateDataStoreRequest) {
        fire_and_forget(vec![ApiRequest::post(
            "/api/datastore",
            serde_json::json!(data),
        )]);
    }
}
