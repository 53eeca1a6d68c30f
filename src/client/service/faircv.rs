use crate::{
    client::{error::ApiError, service::ApiClient},
    model::faircv::{FairCvPageDto, FairCvSummaryDto, NewFairCvDto},
};

use super::request;

impl ApiClient {
    /// Retrieve one page of the organization's FairCVs, `page` starts at 1
    pub async fn list_faircvs(&self, page: usize) -> Result<FairCvPageDto, ApiError> {
        let page = page.max(1);

        request::get_json(&self.url(&format!("faircvs?page={}", page))).await
    }

    pub async fn create_faircv(&self, faircv: &NewFairCvDto) -> Result<FairCvSummaryDto, ApiError> {
        request::post_json(&self.url("faircvs"), faircv).await
    }
}
