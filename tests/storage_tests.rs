//! Storage gateway tests
//!
//! Contract tests for the in-memory backend: atomic insert-if-absent,
//! atomic access counting, filtered loads and removal semantics.

use std::sync::Arc;

use pastelink::errors::PastelinkError;
use pastelink::storage::models::{AccessCountOp, Resource, ResourceFilter, ResourceType};
use pastelink::storage::{MemoryStorage, Storage};

// =============================================================================
// Test Setup
// =============================================================================

fn resource(id: &str, resource_type: ResourceType) -> Resource {
    Resource {
        id: id.to_string(),
        content: format!("content of {}", id),
        vanity_url: None,
        resource_type,
        expiration_time: None,
        access_count: 0,
    }
}

fn storage() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::new())
}

// =============================================================================
// Insert / Get
// =============================================================================

#[tokio::test]
async fn insert_then_get_roundtrip() {
    let storage = storage();
    storage
        .insert(resource("abc12", ResourceType::Text))
        .await
        .unwrap();

    let found = storage.get("abc12").await.unwrap().unwrap();
    assert_eq!(found.id, "abc12");
    assert_eq!(found.content, "content of abc12");
    assert_eq!(found.access_count, 0);
}

#[tokio::test]
async fn get_missing_returns_none() {
    let storage = storage();
    assert!(storage.get("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_insert_is_rejected() {
    let storage = storage();
    storage
        .insert(resource("dup01", ResourceType::Text))
        .await
        .unwrap();

    let err = storage
        .insert(resource("dup01", ResourceType::Link))
        .await
        .unwrap_err();
    assert!(matches!(err, PastelinkError::AlreadyExists(_)));

    // The first record survives the failed insert untouched.
    let found = storage.get("dup01").await.unwrap().unwrap();
    assert_eq!(found.resource_type, ResourceType::Text);
}

#[tokio::test]
async fn exists_checks_ids_and_vanity_slugs() {
    let storage = storage();
    let mut r = resource("real1", ResourceType::Text);
    r.vanity_url = Some("pretty-name".to_string());
    storage.insert(r).await.unwrap();

    assert!(storage.exists_id_or_vanity("real1").await.unwrap());
    assert!(storage.exists_id_or_vanity("pretty-name").await.unwrap());
    assert!(!storage.exists_id_or_vanity("other").await.unwrap());
}

// =============================================================================
// Access counting
// =============================================================================

#[tokio::test]
async fn increment_access_count_accumulates() {
    let storage = storage();
    storage
        .insert(resource("hits1", ResourceType::Text))
        .await
        .unwrap();

    for _ in 0..5 {
        storage.increment_access_count("hits1").await.unwrap();
    }

    let found = storage.get("hits1").await.unwrap().unwrap();
    assert_eq!(found.access_count, 5);
}

#[tokio::test]
async fn concurrent_increments_do_not_lose_updates() {
    let storage = storage();
    storage
        .insert(resource("race1", ResourceType::Text))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            storage.increment_access_count("race1").await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let found = storage.get("race1").await.unwrap().unwrap();
    assert_eq!(found.access_count, 50);
}

#[tokio::test]
async fn increment_missing_is_not_found() {
    let storage = storage();
    let err = storage.increment_access_count("ghost").await.unwrap_err();
    assert!(matches!(err, PastelinkError::NotFound(_)));
}

// =============================================================================
// Update / Remove
// =============================================================================

#[tokio::test]
async fn update_content_replaces_payload_only() {
    let storage = storage();
    storage
        .insert(resource("edit1", ResourceType::Text))
        .await
        .unwrap();
    storage.increment_access_count("edit1").await.unwrap();

    let updated = storage.update_content("edit1", "new words").await.unwrap();
    assert_eq!(updated.content, "new words");
    assert_eq!(updated.access_count, 1);
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let storage = storage();
    let err = storage.update_content("ghost", "x").await.unwrap_err();
    assert!(matches!(err, PastelinkError::NotFound(_)));
}

#[tokio::test]
async fn remove_returns_the_removed_record() {
    let storage = storage();
    storage
        .insert(resource("gone1", ResourceType::Link))
        .await
        .unwrap();

    let removed = storage.remove("gone1").await.unwrap();
    assert_eq!(removed.id, "gone1");
    assert!(storage.get("gone1").await.unwrap().is_none());

    let err = storage.remove("gone1").await.unwrap_err();
    assert!(matches!(err, PastelinkError::NotFound(_)));
}

#[tokio::test]
async fn remove_all_empties_the_store() {
    let storage = storage();
    for id in ["a0001", "a0002", "a0003"] {
        storage.insert(resource(id, ResourceType::Text)).await.unwrap();
    }

    storage.remove_all().await.unwrap();
    assert!(storage.load_all().await.unwrap().is_empty());
}

// =============================================================================
// Filtered loads
// =============================================================================

async fn seeded_storage() -> Arc<MemoryStorage> {
    let storage = storage();
    for (id, t, hits) in [
        ("text1", ResourceType::Text, 0u64),
        ("text2", ResourceType::Text, 3),
        ("link1", ResourceType::Link, 3),
        ("link2", ResourceType::Link, 10),
    ] {
        storage.insert(resource(id, t)).await.unwrap();
        for _ in 0..hits {
            storage.increment_access_count(id).await.unwrap();
        }
    }
    storage
}

#[tokio::test]
async fn filter_by_type() {
    let storage = seeded_storage().await;
    let filter = ResourceFilter {
        resource_type: Some(ResourceType::Link),
        access_count: None,
    };

    let mut ids: Vec<String> = storage
        .load_filtered(&filter)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["link1", "link2"]);
}

#[tokio::test]
async fn filter_by_access_count_operators() {
    let storage = seeded_storage().await;

    let eq3 = ResourceFilter {
        resource_type: None,
        access_count: Some((AccessCountOp::Eq, 3)),
    };
    assert_eq!(storage.load_filtered(&eq3).await.unwrap().len(), 2);

    let gt3 = ResourceFilter {
        resource_type: None,
        access_count: Some((AccessCountOp::Gt, 3)),
    };
    let hot = storage.load_filtered(&gt3).await.unwrap();
    assert_eq!(hot.len(), 1);
    assert_eq!(hot[0].id, "link2");

    let le3 = ResourceFilter {
        resource_type: None,
        access_count: Some((AccessCountOp::Le, 3)),
    };
    assert_eq!(storage.load_filtered(&le3).await.unwrap().len(), 3);
}

#[tokio::test]
async fn filter_combines_type_and_count() {
    let storage = seeded_storage().await;
    let filter = ResourceFilter {
        resource_type: Some(ResourceType::Text),
        access_count: Some((AccessCountOp::Ge, 1)),
    };

    let matched = storage.load_filtered(&filter).await.unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "text2");
}
