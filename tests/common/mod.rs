#![allow(dead_code)]

use std::sync::Arc;

use hamster::application::services::{AuthService, LinkService};
use hamster::domain::entities::ShortLink;
use hamster::domain::repositories::LinkRepository;
use hamster::infrastructure::persistence::{RedbLinkRepository, open_database};
use hamster::state::AppState;
use tempfile::TempDir;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_BASE_URL: &str = "http://127.0.0.1:5050/";

/// Opens a fresh database in a temporary directory.
///
/// The returned [`TempDir`] must outlive the repository; dropping it
/// deletes the backing file.
pub fn create_test_repository() -> (RedbLinkRepository, TempDir) {
    let dir = TempDir::new().unwrap();
    let db = open_database(dir.path().join("links.redb")).unwrap();

    (RedbLinkRepository::new(Arc::new(db)), dir)
}

/// Builds application state backed by a fresh temporary database.
///
/// The second repository handle shares the same database, so tests can
/// seed and inspect links behind the handlers' backs.
pub fn create_test_state() -> (AppState, RedbLinkRepository, TempDir) {
    let dir = TempDir::new().unwrap();
    let db = Arc::new(open_database(dir.path().join("links.redb")).unwrap());

    let repo = RedbLinkRepository::new(db.clone());
    let seed_repo = RedbLinkRepository::new(db);

    let link_service = Arc::new(LinkService::new(Arc::new(repo)));
    let auth_service = Arc::new(AuthService::new(TEST_SECRET.to_string()));

    let state = AppState::new(link_service, auth_service, TEST_BASE_URL.to_string());

    (state, seed_repo, dir)
}

/// Inserts a link under a known slug, asserting the spot was free.
pub async fn insert_test_link(repo: &RedbLinkRepository, slug: &str, target: &str) {
    let inserted = repo
        .insert_if_absent(&ShortLink::new(slug.to_string(), target.to_string()))
        .await
        .unwrap();

    assert!(inserted, "slug {} was already taken", slug);
}
