//! Core link shortening service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::{slug, url_validator};

/// Upper bound on slug allocation attempts for one create request.
///
/// With 57^6 possible slugs a collision is rare until the store holds
/// hundreds of millions of links, so exhausting this bound indicates a
/// problem beyond bad luck and the request fails instead of spinning.
const MAX_SLUG_ATTEMPTS: usize = 16;

/// Service implementing the create and resolve pipelines.
///
/// Generic over the repository so tests can substitute a mock without
/// touching a real database.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// # Arguments
    ///
    /// - `link_repository` - repository for persisting and resolving links
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `target` under a freshly generated slug.
    ///
    /// The target is validated and canonicalized first, then slugs are
    /// drawn until one lands in a free spot. The conditional insert checks
    /// occupancy and writes in the same transaction, so two concurrent
    /// requests can never claim the same slug.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `target` is not an absolute HTTP or
    ///   HTTPS URL
    /// - [`AppError::Internal`] if the store fails or no free slug was
    ///   found within [`MAX_SLUG_ATTEMPTS`] draws
    pub async fn create_link(&self, target: &str) -> Result<ShortLink, AppError> {
        let target = url_validator::validate_target(target).map_err(|e| {
            AppError::bad_request("Invalid target URL", json!({ "reason": e.to_string() }))
        })?;

        for _ in 0..MAX_SLUG_ATTEMPTS {
            let link = ShortLink::new(slug::generate(), target.clone());

            if self.link_repository.insert_if_absent(&link).await? {
                return Ok(link);
            }

            tracing::warn!("Slug collision on {}, retrying", link.slug);
        }

        tracing::error!(
            "Gave up allocating a slug after {} attempts",
            MAX_SLUG_ATTEMPTS
        );

        Err(AppError::internal(
            "Failed to allocate a unique slug",
            json!({ "attempts": MAX_SLUG_ATTEMPTS }),
        ))
    }

    /// Resolves a slug to its stored target URL.
    ///
    /// Anything that is not exactly [`slug::SLUG_LEN`] characters long is
    /// rejected before the store is consulted. Store failures are logged
    /// and reported as an absent link, so a flaky database degrades to 404
    /// instead of leaking errors on the public read path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link exists under `slug_value`.
    pub async fn resolve_slug(&self, slug_value: &str) -> Result<String, AppError> {
        if slug_value.len() != slug::SLUG_LEN {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "slug": slug_value }),
            ));
        }

        let found = match self.link_repository.find_by_slug(slug_value).await {
            Ok(found) => found,
            Err(e) => {
                tracing::error!("Lookup failed for {}: {}", slug_value, e);
                None
            }
        };

        match found {
            Some(link) => Ok(link.target),
            None => Err(AppError::not_found(
                "Short link not found",
                json!({ "slug": slug_value }),
            )),
        }
    }

    /// Composes the public short URL for a slug.
    pub fn short_url(&self, base_url: &str, slug: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), slug)
    }

    /// Returns the number of stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    pub async fn count_links(&self) -> Result<u64, AppError> {
        self.link_repository.count().await
    }
}
