//! financeflow-store: JSON-file persistence for users, the active session and
//! each user's ledger.

pub mod gateway;
pub mod json_store;
pub mod session;

pub use gateway::PersistenceGateway;
pub use json_store::JsonStore;
pub use session::Session;
