use std::sync::Arc;
use tracing::debug;

use super::kv::{KeyValueStore, MemoryStore};
use crate::constants::TOKEN_KEY;
use crate::utils::{log_warn, StudyHubError};

/// Persists the single session token under a fixed key
///
/// The token is opaque: no expiry, no refresh, no encryption. It stays
/// valid from the client's point of view until `remove` is called.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// A store that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Write the token, overwriting any previous value
    pub fn save(&self, token: &str) -> Result<(), StudyHubError> {
        self.backend.set_item(TOKEN_KEY, token)?;
        debug!("Session token saved");
        Ok(())
    }

    /// The stored token, or `None` if there is none
    ///
    /// Backend read failures are logged and reported as absent.
    pub fn get(&self) -> Option<String> {
        match self.backend.get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                log_warn("[token]", format!("Could not read session token: {}", e));
                None
            }
        }
    }

    /// Delete the token; succeeds when nothing is stored
    pub fn remove(&self) -> Result<(), StudyHubError> {
        self.backend.remove_item(TOKEN_KEY)?;
        debug!("Session token removed");
        Ok(())
    }

    /// The token to present as a bearer; an empty stored value counts as none
    pub fn bearer(&self) -> Option<String> {
        self.get().filter(|t| !t.is_empty())
    }

    /// Whether a non-empty token is stored
    pub fn has_token(&self) -> bool {
        self.bearer().is_some()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}
