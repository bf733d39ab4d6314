use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::api::ProfileClient;
use crate::models::UserProfile;
use crate::utils::{log_error, StudyHubError};

/// What a call to `UserContext::refetch` ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum RefetchOutcome {
    /// The cached profile was replaced
    Updated,
    /// Server said `success: false`; cache unchanged
    Rejected(Option<String>),
    /// A later refetch was started before this one finished; reply dropped
    Superseded,
}

struct Slot {
    user: Option<UserProfile>,
    loading: bool,
}

/// Shared cache of the last fetched profile
///
/// Every refetch draws a ticket. Only the reply holding the newest ticket
/// may write the slot, so a slow stale reply cannot overwrite a fresh one.
pub struct UserContext {
    client: ProfileClient,
    slot: RwLock<Slot>,
    latest: AtomicU64,
}

impl UserContext {
    /// A context that has not fetched yet (loading)
    pub fn new(client: ProfileClient) -> Self {
        Self {
            client,
            slot: RwLock::new(Slot {
                user: None,
                loading: true,
            }),
            latest: AtomicU64::new(0),
        }
    }

    pub async fn user(&self) -> Option<UserProfile> {
        self.slot.read().await.user.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.slot.read().await.loading
    }

    /// Re-read the profile and replace the cache if this is still the
    /// newest request
    pub async fn refetch(&self) -> Result<RefetchOutcome, StudyHubError> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.slot.write().await.loading = true;

        let result = self.client.get_profile().await;

        let mut slot = self.slot.write().await;
        if self.latest.load(Ordering::SeqCst) != ticket {
            debug!("Dropping profile reply for superseded request #{}", ticket);
            return Ok(RefetchOutcome::Superseded);
        }
        slot.loading = false;

        match result {
            Ok(response) if response.success => match response.data {
                Some(profile) => {
                    slot.user = Some(profile);
                    Ok(RefetchOutcome::Updated)
                }
                None => {
                    warn!("Profile reply had no data");
                    Ok(RefetchOutcome::Rejected(response.message))
                }
            },
            Ok(response) => {
                warn!(
                    "Profile fetch rejected ({}): {}",
                    response.status,
                    response.message.as_deref().unwrap_or("no message")
                );
                Ok(RefetchOutcome::Rejected(response.message))
            }
            Err(e) => {
                log_error("[profile]", format!("Failed to fetch user: {}", e));
                Err(e)
            }
        }
    }

    /// Forget the cached profile, e.g. after signing out
    pub async fn clear(&self) {
        // Outstanding refetches must not repopulate the slot
        self.latest.fetch_add(1, Ordering::SeqCst);
        let mut slot = self.slot.write().await;
        slot.user = None;
        slot.loading = false;
    }
}
