/// Session management module - Gateway

mod gate;
mod user_context;

pub use gate::{GateState, Route, SessionGate};
pub use user_context::{RefetchOutcome, UserContext};
