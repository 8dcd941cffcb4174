//! Embedded-store repository implementations.
//!
//! Concrete implementations of domain repository traits using redb, an
//! embedded ordered key-value store with MVCC transactions. There is no
//! external database process: the store is a single file on local disk.
//!
//! # Repositories
//!
//! - [`RedbLinkRepository`] - Link storage and retrieval
//!
//! [`open_database`] creates or opens the backing file and initializes the
//! schema; startup calls it once and shares the handle.

pub mod redb_link_repository;

pub use redb_link_repository::{RedbLinkRepository, open_database};
