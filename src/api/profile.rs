use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use super::envelope::ApiResponse;
use super::transport::{ApiRequest, Transport};
use crate::constants::{PROFILE_DETAILS_PATH, PROFILE_UPDATE_PATH};
use crate::models::{ProfileUpdate, UserProfile};
use crate::storage::TokenStore;
use crate::utils::StudyHubError;

/// Reads and updates the signed-in user's profile
///
/// The stored token is attached when there is one; a missing or stale
/// token is for the server to reject.
#[derive(Clone)]
pub struct ProfileClient {
    transport: Arc<dyn Transport>,
    tokens: TokenStore,
}

impl ProfileClient {
    pub fn new(transport: Arc<dyn Transport>, tokens: TokenStore) -> Self {
        Self { transport, tokens }
    }

    pub async fn get_profile(&self) -> Result<ApiResponse<UserProfile>, StudyHubError> {
        let request = ApiRequest::get(PROFILE_DETAILS_PATH).with_bearer(self.tokens.bearer());
        ApiResponse::from_reply(self.transport.execute(request).await?)
    }

    /// Send a partial update; the server merges it
    ///
    /// Nothing is cached here. Refetch after a successful reply.
    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<ApiResponse<Value>, StudyHubError> {
        let body = serde_json::to_value(update)?;
        debug!("Updating profile fields: {}", body);
        let request = ApiRequest::put(PROFILE_UPDATE_PATH, body).with_bearer(self.tokens.bearer());
        ApiResponse::from_reply(self.transport.execute(request).await?)
    }
}
