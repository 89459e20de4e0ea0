use contracts::domain::hyper::HyperSummary;

use crate::shared::api_utils::ApiRequest;

pub struct HyperApi;

impl HyperApi {
    /// Hypervisor summary and the signed-in user
    pub async fn get() -> Result<HyperSummary, String> {
        ApiRequest::get("/api/hyper").fetch_json().await
    }
}
