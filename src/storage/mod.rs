// Gateway module for storage - follows the Train Station Pattern
// All external access must go through this gateway

mod file_store;
mod kv;
mod token_store;

pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use token_store::TokenStore;
