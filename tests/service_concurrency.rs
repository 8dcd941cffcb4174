mod common;

use std::collections::HashSet;
use std::sync::Arc;

use hamster::application::services::LinkService;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_allocate_distinct_slugs() {
    let (repo, _dir) = common::create_test_repository();
    let service = Arc::new(LinkService::new(Arc::new(repo)));

    let mut handles = Vec::new();
    for i in 0..32 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .create_link(&format!("https://example.com/page/{i}"))
                .await
        }));
    }

    let mut links = Vec::new();
    for handle in handles {
        links.push(handle.await.unwrap().unwrap());
    }

    let slugs: HashSet<&str> = links.iter().map(|link| link.slug.as_str()).collect();
    assert_eq!(slugs.len(), links.len(), "every create got its own slug");

    assert_eq!(service.count_links().await.unwrap(), 32);

    // Each allocated slug must resolve to exactly the target it was created with
    for link in &links {
        let target = service.resolve_slug(&link.slug).await.unwrap();
        assert_eq!(target, link.target);
    }
}
