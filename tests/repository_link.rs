mod common;

use std::sync::Arc;

use hamster::domain::entities::ShortLink;
use hamster::domain::repositories::LinkRepository;
use hamster::error::AppError;
use hamster::infrastructure::persistence::{RedbLinkRepository, open_database};
use tempfile::TempDir;

#[tokio::test]
async fn test_insert_if_absent_claims_free_slug() {
    let (repo, _dir) = common::create_test_repository();

    let link = ShortLink::new("abc234".to_string(), "https://example.com/".to_string());
    let inserted = repo.insert_if_absent(&link).await.unwrap();

    assert!(inserted);

    let stored = repo.find_by_slug("abc234").await.unwrap();
    assert_eq!(stored, Some(link));
}

#[tokio::test]
async fn test_insert_if_absent_rejects_taken_slug() {
    let (repo, _dir) = common::create_test_repository();

    let first = ShortLink::new("abc234".to_string(), "https://example.com/first".to_string());
    assert!(repo.insert_if_absent(&first).await.unwrap());

    let second = ShortLink::new("abc234".to_string(), "https://example.com/second".to_string());
    let inserted = repo.insert_if_absent(&second).await.unwrap();

    assert!(!inserted);

    // The original mapping must be untouched by the rejected insert
    let stored = repo.find_by_slug("abc234").await.unwrap().unwrap();
    assert_eq!(stored.target, "https://example.com/first");
}

#[tokio::test]
async fn test_find_by_slug_not_found() {
    let (repo, _dir) = common::create_test_repository();

    let result = repo.find_by_slug("zzzzzz").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_rejects_malformed_slug() {
    let (repo, _dir) = common::create_test_repository();

    let too_short = ShortLink::new("abc".to_string(), "https://example.com/".to_string());
    let result = repo.insert_if_absent(&too_short).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

    let bad_alphabet = ShortLink::new("abc0de".to_string(), "https://example.com/".to_string());
    let result = repo.insert_if_absent(&bad_alphabet).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_count_tracks_inserts() {
    let (repo, _dir) = common::create_test_repository();

    assert_eq!(repo.count().await.unwrap(), 0);

    for (slug, target) in [
        ("abc234", "https://example.com/a"),
        ("def567", "https://example.com/b"),
        ("ghj892", "https://example.com/c"),
    ] {
        common::insert_test_link(&repo, slug, target).await;
    }

    assert_eq!(repo.count().await.unwrap(), 3);

    // A rejected insert must not bump the count
    let duplicate = ShortLink::new("abc234".to_string(), "https://example.com/x".to_string());
    assert!(!repo.insert_if_absent(&duplicate).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_links_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.redb");

    {
        let repo = RedbLinkRepository::new(Arc::new(open_database(&path).unwrap()));
        common::insert_test_link(&repo, "abc234", "https://example.com/persisted").await;
    }

    let repo = RedbLinkRepository::new(Arc::new(open_database(&path).unwrap()));

    let stored = repo.find_by_slug("abc234").await.unwrap().unwrap();
    assert_eq!(stored.target, "https://example.com/persisted");
    assert_eq!(repo.count().await.unwrap(), 1);
}
