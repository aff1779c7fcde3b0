//! Persistence seam for the document store.
//!
//! The service never talks to a concrete database driver directly; handlers
//! and repositories go through the [`DocumentStore`] trait so tests can swap
//! in a failing backend.

pub mod backend;
pub mod error;
pub mod memory;

pub use backend::{Document, DocumentStore};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
