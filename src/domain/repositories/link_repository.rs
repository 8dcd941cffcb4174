//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link store.
///
/// The store is append-only from the caller's point of view: links can be
/// inserted and looked up, never updated or deleted. Insertion is
/// conditional so that a slug can only ever map to the target it was first
/// persisted with.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedbLinkRepository`] - embedded redb implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its slug.
    ///
    /// The lookup runs against a consistent snapshot of the store, so a
    /// concurrent insert can never produce a torn read.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortLink>, AppError>;

    /// Inserts a link only if its slug is not already present.
    ///
    /// The existence check and the insert happen atomically in a single
    /// write transaction. Returns `Ok(true)` if the link was inserted and
    /// `Ok(false)` if the slug was already taken, in which case the stored
    /// value is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug has the wrong length or
    /// characters outside the slug alphabet.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_if_absent(&self, link: &ShortLink) -> Result<bool, AppError>;

    /// Counts the persisted links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<u64, AppError>;
}
