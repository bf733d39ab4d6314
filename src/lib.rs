pub mod api;
pub mod app;
pub mod cart;
pub mod cli;
pub mod constants;
pub mod models;
pub mod session;
pub mod storage;
pub mod utils;
pub mod views;

pub use app::{load_config, AppContext, Config};
pub use session::{Route, SessionGate, UserContext};
pub use storage::TokenStore;
pub use utils::StudyHubError;
