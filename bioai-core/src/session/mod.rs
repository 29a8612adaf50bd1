//! Session state: who is logged in, mirrored to durable key/value storage.

pub mod storage;
pub mod store;
pub mod types;

pub use storage::{KeyValueStore, MemoryStore, TOKEN_KEY, USER_KEY};
pub use store::SessionStore;
pub use types::Session;
