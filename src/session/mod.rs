//! Session persistence: score tally and preferences in one named slot.
//!
//! - `record`: the persisted data and its JSON shape
//! - `slot`: raw key-value mechanisms (memory, file, browser storage)
//! - `store`: binds a slot to a key and applies the failure policy

pub mod record;
pub mod slot;
pub mod store;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use record::{PersistedSession, Preferences, ScoreTally};
pub use slot::{FileSlot, MemorySlot, SessionSlot};
pub use store::SessionStore;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::LocalStorageSlot;
