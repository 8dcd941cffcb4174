//! redb implementation of the link repository.

use async_trait::async_trait;
use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_storage_error};
use crate::utils::slug;
use serde_json::json;

/// Table mapping slugs to their raw target URLs.
const LINKS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("links_v1");

/// Creates or opens the link database at `path`.
///
/// Missing parent directories are created, and the links table is
/// initialized inside a committed write transaction so later read
/// transactions always find it.
///
/// # Errors
///
/// Returns an error if the directories or the database file cannot be
/// created. Callers treat this as fatal: a service without its store has
/// nothing to serve.
pub fn open_database(path: impl AsRef<Path>) -> anyhow::Result<Database> {
    use anyhow::Context;

    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create database directory {}", parent.display()))?;
    }

    let db = Database::create(path)
        .with_context(|| format!("Failed to open database at {}", path.display()))?;

    let txn = db.begin_write().context("Failed to start schema transaction")?;
    {
        txn.open_table(LINKS_TABLE)
            .context("Failed to initialize links table")?;
    }
    txn.commit().context("Failed to commit schema transaction")?;

    Ok(db)
}

/// Link repository backed by an embedded redb database.
///
/// redb gives this repository its two load-bearing guarantees: read
/// transactions observe a consistent snapshot (MVCC), and write
/// transactions are serialized and durable on commit. Both
/// [`find_by_slug`](LinkRepository::find_by_slug) and
/// [`insert_if_absent`](LinkRepository::insert_if_absent) lean on them.
pub struct RedbLinkRepository {
    db: Arc<Database>,
}

impl RedbLinkRepository {
    /// Creates a new repository over an opened database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LinkRepository for RedbLinkRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortLink>, AppError> {
        let txn = self.db.begin_read().map_err(map_storage_error)?;
        let table = txn.open_table(LINKS_TABLE).map_err(map_storage_error)?;

        let target = table
            .get(slug)
            .map_err(map_storage_error)?
            .map(|guard| guard.value().to_string());

        Ok(target.map(|target| ShortLink::new(slug.to_string(), target)))
    }

    async fn insert_if_absent(&self, link: &ShortLink) -> Result<bool, AppError> {
        // Write-time guard: malformed keys never reach the table, even if a
        // caller bypasses the generator.
        if !slug::is_valid(&link.slug) {
            return Err(AppError::bad_request(
                "Slug must be 6 characters from the slug alphabet",
                json!({ "slug": link.slug }),
            ));
        }

        let txn = self.db.begin_write().map_err(map_storage_error)?;

        let inserted = {
            let mut table = txn.open_table(LINKS_TABLE).map_err(map_storage_error)?;

            let occupied = table
                .get(link.slug.as_str())
                .map_err(map_storage_error)?
                .is_some();

            if occupied {
                false
            } else {
                table
                    .insert(link.slug.as_str(), link.target.as_str())
                    .map_err(map_storage_error)?;
                true
            }
        };

        if inserted {
            txn.commit().map_err(map_storage_error)?;
        } else {
            txn.abort().map_err(map_storage_error)?;
        }

        Ok(inserted)
    }

    async fn count(&self) -> Result<u64, AppError> {
        let txn = self.db.begin_read().map_err(map_storage_error)?;
        let table = txn.open_table(LINKS_TABLE).map_err(map_storage_error)?;

        table.len().map_err(map_storage_error)
    }
}
