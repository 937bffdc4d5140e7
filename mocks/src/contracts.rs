//! Contract test helpers for validating trait implementations
//!
//! Provides standardized tests that any implementation of core traits
//! should pass, ensuring consistent behavior across different implementations.

use crate::{create_new_item, NewItemBuilder};
use item_core::ItemRepository;

/// Test any ItemRepository implementation with comprehensive contract tests
///
/// This function runs a suite of tests that any ItemRepository implementation
/// should pass to be considered compliant with the expected contract.
pub async fn test_repository_contract<R: ItemRepository>(repo: &R) {
    test_create_contract(repo).await;
    test_get_contract(repo).await;
    test_update_contract(repo).await;
    test_delete_contract(repo).await;
    test_list_contract(repo).await;
    test_health_check_contract(repo).await;
}

/// Test item creation contract
pub async fn test_create_contract<R: ItemRepository>(repo: &R) {
    let candidate = create_new_item();
    let item = repo
        .create(candidate.clone())
        .await
        .expect("Create should succeed");

    assert!(item.id > 0, "Created item should have positive ID");
    assert_eq!(item.name, candidate.name, "Created item should preserve name");
    assert_eq!(
        item.quantity, candidate.quantity,
        "Created item should preserve quantity"
    );
    assert_eq!(
        item.price, candidate.price,
        "Created item should preserve price"
    );
    assert_eq!(
        item.supplier, candidate.supplier,
        "Created item should preserve supplier"
    );

    // Create is never idempotent: a second identical candidate yields a
    // fresh record under a fresh ID
    let twin = repo
        .create(candidate)
        .await
        .expect("Second create should succeed");
    assert_ne!(twin.id, item.id, "Each create must assign a new ID");
}

/// Test item retrieval contract
pub async fn test_get_contract<R: ItemRepository>(repo: &R) {
    let candidate = NewItemBuilder::new().with_name("Get Contract").build();
    let item = repo.create(candidate).await.expect("Create should succeed");

    // Round-trip: get after create yields the stored record
    let retrieved = repo
        .get(item.id)
        .await
        .expect("Get should succeed")
        .expect("Created item should be found");
    assert_eq!(retrieved, item);

    // Absence is Ok(None), never an Err
    let missing = repo.get(99999).await.expect("Get should succeed");
    assert!(missing.is_none(), "Unknown ID should yield None");
}

/// Test item update contract
pub async fn test_update_contract<R: ItemRepository>(repo: &R) {
    let item = repo
        .create(NewItemBuilder::new().with_name("Update Contract").build())
        .await
        .expect("Create should succeed");

    // Wholesale replacement: every non-ID field is overwritten
    let replacement = NewItemBuilder::new()
        .with_name("Replaced")
        .with_quantity(77)
        .with_price(7.77)
        .with_supplier("Replacement Supplies")
        .build();

    let updated = repo
        .update(item.id, replacement)
        .await
        .expect("Update should succeed")
        .expect("Existing item should be updated");
    assert_eq!(updated.id, item.id, "ID should remain unchanged");
    assert_eq!(updated.name, "Replaced");
    assert_eq!(updated.quantity, 77);
    assert_eq!(updated.price, 7.77);
    assert_eq!(updated.supplier, "Replacement Supplies");

    // Update on an unknown ID is Ok(None) and must not create the record
    let ghost = repo
        .update(99999, NewItemBuilder::new().build())
        .await
        .expect("Update should succeed");
    assert!(ghost.is_none(), "Unknown ID should yield None");
    assert!(
        repo.get(99999).await.expect("Get should succeed").is_none(),
        "Update must never create records"
    );
}

/// Test item deletion contract
pub async fn test_delete_contract<R: ItemRepository>(repo: &R) {
    let item = repo
        .create(NewItemBuilder::new().with_name("Delete Contract").build())
        .await
        .expect("Create should succeed");

    // First delete removes the record
    let deleted = repo.delete(item.id).await.expect("Delete should succeed");
    assert!(deleted, "Existing item should be deleted");
    assert!(
        repo.get(item.id).await.expect("Get should succeed").is_none(),
        "Deleted item should be gone"
    );

    // Second delete on the same ID reports absence
    let deleted_again = repo.delete(item.id).await.expect("Delete should succeed");
    assert!(!deleted_again, "Repeated delete should report absence");

    // Unknown ID reports absence without error
    let missing = repo.delete(99999).await.expect("Delete should succeed");
    assert!(!missing, "Unknown ID should report absence");
}

/// Test item listing contract
pub async fn test_list_contract<R: ItemRepository>(repo: &R) {
    let first = repo
        .create(NewItemBuilder::new().with_name("List Contract A").build())
        .await
        .expect("Create should succeed");
    let second = repo
        .create(NewItemBuilder::new().with_name("List Contract B").build())
        .await
        .expect("Create should succeed");

    let all = repo.list().await.expect("List should succeed");

    // Both created items appear, earlier creation first
    crate::assert_contains_item_with_id(&all, first.id);
    crate::assert_contains_item_with_id(&all, second.id);
    crate::assert_items_sorted_by_id(&all);
    crate::assert_ids_unique(&all);
}

/// Test health check contract
pub async fn test_health_check_contract<R: ItemRepository>(repo: &R) {
    repo.health_check()
        .await
        .expect("Healthy repository should pass health check");
}
