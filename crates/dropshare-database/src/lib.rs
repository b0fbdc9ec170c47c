//! # dropshare-database
//!
//! Document store client for DropShare: the [`DocumentStore`] trait the
//! views talk to, a PostgreSQL implementation, an in-memory
//! implementation, and the [`StoreManager`] that picks one from
//! configuration.

pub mod provider;
pub mod store;

pub use provider::StoreManager;
pub use store::{DocumentStore, MemoryDocumentStore, PgDocumentStore, mask_password};
