/// In-memory cart - Gateway
mod items;

pub use items::{Cart, CheckoutStatus};
