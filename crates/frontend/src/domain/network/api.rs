use contracts::domain::network::{CreateNetworkRequest, Network};

use crate::shared::api_utils::{fire_and_forget, item_path, ApiRequest};
use crate::shared::selection::SelectionSet;

/// Fetch all networks
pub async fn fetch_networks() -> Result<Vec<Network>, String> {
    ApiRequest::get("/api/network").fetch_json().await
}

#[derive(Debug, Clone, Default)]
pub struct NetworkApi {
    uuids: SelectionSet,
}

impl NetworkApi {
    pub fn new(uuids: SelectionSet) -> Self {
        Self { uuids }
    }

    pub fn uuids(&self) -> &SelectionSet {
        &self.uuids
    }

    pub fn delete_requests(&self) -> Vec<ApiRequest> {
        self.uuids
            .iter()
            .map(|uuid| ApiRequest::delete(item_path("network", uuid)))
            .collect()
    }

    pub fn delete(&self) {
        fire_and_forget(self.delete_requests());
    }

    pub fn create_request(data: &CreateNetworkRequest) -> ApiRequest {
        ApiRequest::post("/api/network", serde_json::json!(data))
    }

    pub fn create(&self, data: &CreateNetworkRequest) {
        fire_and_forget(vec![Self::create_request(data)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_per_uuid() {
        let api = NetworkApi::new(SelectionSet::from_values(["n1", "n2"]));
        assert_eq!(
            api.delete_requests(),
            vec![
                ApiRequest::delete("/api/network/n1"),
                ApiRequest::delete("/api/network/n2"),
            ]
        );
        assert!(NetworkApi::default().delete_requests().is_empty());
    }

    #[test]
    fn test_create_body() {
        let request = NetworkApi::create_request(&CreateNetworkRequest {
            name: "lan".into(),
            address: "172.16.1.1".into(),
            netmask: "255.255.255.0".into(),
            mode: "nat".into(),
        });
        assert_eq!(request.path, "/api/network");
        assert_eq!(request.body.unwrap()["address"], "172.16.1.1");
    }
}
