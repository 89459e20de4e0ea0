use contracts::domain::instance::{
    CreateInstanceRequest, Instance, InstanceAction, InstanceActionRequest,
};

use crate::shared::api_utils::{fire_and_forget, item_path, ApiRequest};
use crate::shared::selection::SelectionSet;

/// Fetch all instances
pub async fn fetch_instances() -> Result<Vec<Instance>, String> {
    ApiRequest::get("/api/instance").fetch_json().await
}

/// Actions over the instances selected when the API object was built.
#[derive(Debug, Clone, Default)]
pub struct InstanceApi {
    uuids: SelectionSet,
}

impl InstanceApi {
    pub fn new(uuids: SelectionSet) -> Self {
        Self { uuids }
    }

    pub fn uuids(&self) -> &SelectionSet {
        &self.uuids
    }

    /// One request per selected instance. `console` is not a REST call.
    pub fn requests(&self, action: InstanceAction) -> Vec<ApiRequest> {
        self.uuids
            .iter()
            .filter_map(|uuid| match action {
                InstanceAction::Console => None,
                InstanceAction::Remove => Some(ApiRequest::delete(item_path("instance", uuid))),
                _ => Some(ApiRequest::put(
                    item_path("instance", uuid),
                    serde_json::json!(InstanceActionRequest { action }),
                )),
            })
            .collect()
    }

    pub fn console_urls(&self) -> Vec<String> {
        self.uuids
            .iter()
            .map(|uuid| format!("/ui/console?id={}", urlencoding::encode(uuid)))
            .collect()
    }

    pub fn run(&self, action: InstanceAction) {
        match action {
            InstanceAction::Console => self.console(),
            _ => fire_and_forget(self.requests(action)),
        }
    }

    /// Opens a console window per instance
    pub fn console(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        for url in self.console_urls() {
            if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                log::warn!("failed to open console {}: {:?}", url, e);
            }
        }
    }

    pub fn start(&self) {
        self.run(InstanceAction::Start);
    }

    pub fn shutdown(&self) {
        self.run(InstanceAction::Shutdown);
    }

    pub fn reset(&self) {
        self.run(InstanceAction::Reset);
    }

    pub fn suspend(&self) {
        self.run(InstanceAction::Suspend);
    }

    pub fn resume(&self) {
        self.run(InstanceAction::Resume);
    }

    pub fn destroy(&self) {
        self.run(InstanceAction::Destroy);
    }

    pub fn remove(&self) {
        self.run(InstanceAction::Remove);
    }

    pub fn create(&self, data: &CreateInstanceRequest) {
        fire_and_forget(vec![create_request(data)]);
    }
}

fn create_request(data: &CreateInstanceRequest) -> ApiRequest {
    ApiRequest::post("/api/instance", serde_json::json!(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::Method;

    #[test]
    fn test_action_requests_per_uuid() {
        let api = InstanceApi::new(SelectionSet::from_values(["a", "b"]));
        let requests = api.requests(InstanceAction::Start);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].path, "/api/instance/a");
        assert_eq!(requests[1].path, "/api/instance/b");
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({ "action": "start" }))
        );
    }

    #[test]
    fn test_remove_is_delete() {
        let api = InstanceApi::new(SelectionSet::from_values(["a"]));
        let requests = api.requests(InstanceAction::Remove);
        assert_eq!(requests, vec![ApiRequest::delete("/api/instance/a")]);
    }

    #[test]
    fn test_console_is_not_a_request() {
        let api = InstanceApi::new(SelectionSet::from_values(["a b"]));
        assert!(api.requests(InstanceAction::Console).is_empty());
        assert_eq!(api.console_urls(), vec!["/ui/console?id=a%20b".to_string()]);
    }

    #[test]
    fn test_default_has_no_targets() {
        let api = InstanceApi::default();
        assert!(api.uuids().is_empty());
        assert!(api.requests(InstanceAction::Destroy).is_empty());
    }

    #[test]
    fn test_create_request() {
        let data = CreateInstanceRequest {
            name: "centos7".into(),
            cpu: 2,
            memory: 2048,
            disk_size: 10,
            ..Default::default()
        };
        let request = create_request(&data);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body.unwrap()["name"], "centos7");
    }
}
