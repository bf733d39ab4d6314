// Gateway module for api - follows the Train Station Pattern
// All external access must go through this gateway

mod auth;
mod courses;
mod envelope;
mod profile;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthClient;
pub use courses::CourseClient;
pub use envelope::ApiResponse;
pub use profile::ProfileClient;
pub use transport::{ApiRequest, HttpReply, HttpTransport, Transport};
