mod agent;
mod selector;

pub use agent::Agent;
pub use selector::{OpponentSelector, DEFAULT_SEED};
