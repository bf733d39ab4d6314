use std::sync::Arc;
use std::time::Duration;

use crate::api::{AuthClient, CourseClient, HttpTransport, ProfileClient, Transport};
use crate::app::config::{Config, StorageBackend};
use crate::session::{SessionGate, UserContext};
use crate::storage::{FileStore, KeyValueStore, MemoryStore, TokenStore};
use crate::utils::{log_debug, log_info, StudyHubError};

/// Everything a view needs, built once and passed by reference
pub struct AppContext {
    pub config: Config,
    pub tokens: TokenStore,
    pub auth: AuthClient,
    pub profile: ProfileClient,
    pub courses: CourseClient,
    pub user: Arc<UserContext>,
    pub gate: SessionGate,
}

impl AppContext {
    /// Wire the context from configuration: storage backend and HTTP transport
    pub fn from_config(config: Config) -> Result<Self, StudyHubError> {
        let backend: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
            StorageBackend::File => {
                let data_dir = config
                    .storage
                    .resolve_data_dir()
                    .map_err(|e| StudyHubError::StorageUnavailable(e.to_string()))?;
                let store = FileStore::new(&data_dir)?;
                log_debug(format!("Token storage at {}", store.path().display()));
                Arc::new(store)
            }
        };

        let transport = HttpTransport::new(
            &config.api.base_url,
            config.api.timeout_secs.map(Duration::from_secs),
        )?;

        Ok(Self::with_parts(config, TokenStore::new(backend), Arc::new(transport)))
    }

    /// Assemble a context from ready-made parts
    pub fn with_parts(config: Config, tokens: TokenStore, transport: Arc<dyn Transport>) -> Self {
        let profile = ProfileClient::new(transport.clone(), tokens.clone());
        Self {
            auth: AuthClient::new(transport.clone(), tokens.clone()),
            courses: CourseClient::new(transport, tokens.clone()),
            user: Arc::new(UserContext::new(profile.clone())),
            profile,
            tokens,
            config,
            gate: SessionGate::new(),
        }
    }

    /// Drop the local token and the cached profile
    pub async fn sign_out(&self) -> Result<(), StudyHubError> {
        self.auth.sign_out()?;
        self.user.clear().await;
        log_info("[session]", "Token and cached profile cleared");
        Ok(())
    }
}
