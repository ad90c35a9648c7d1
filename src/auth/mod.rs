//! Credential storage
//!
//! One named store with a read/write/clear contract, consumed by every
//! collaborator that needs the backend bearer token.

mod store;

pub use store::{CredentialStore, FileTokenStore, MemoryTokenStore};
