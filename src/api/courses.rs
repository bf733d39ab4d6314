use std::sync::Arc;

use super::envelope::ApiResponse;
use super::transport::{ApiRequest, Transport};
use crate::constants::ENROLLED_COURSES_PATH;
use crate::models::EnrolledCourse;
use crate::storage::TokenStore;
use crate::utils::StudyHubError;

/// Lists the courses the signed-in user is enrolled in
#[derive(Clone)]
pub struct CourseClient {
    transport: Arc<dyn Transport>,
    tokens: TokenStore,
}

impl CourseClient {
    pub fn new(transport: Arc<dyn Transport>, tokens: TokenStore) -> Self {
        Self { transport, tokens }
    }

    pub async fn get_enrolled_courses(
        &self,
    ) -> Result<ApiResponse<Vec<EnrolledCourse>>, StudyHubError> {
        let request = ApiRequest::get(ENROLLED_COURSES_PATH).with_bearer(self.tokens.bearer());
        ApiResponse::from_reply(self.transport.execute(request).await?)
    }
}
