use database::{Item, ItemRepository, NewItem};
use std::sync::Arc;

/// Contract tests that all ItemRepository implementations must pass
///
/// These tests verify that implementations correctly handle all operations
/// defined in the ItemRepository trait, including the absent-row outcomes
/// that callers must be able to distinguish from storage faults.

#[allow(dead_code)]
pub async fn test_repository_contract<R: ItemRepository + Clone + Send + Sync + 'static>(
    repo: Arc<R>,
) {
    test_health_check(repo.clone()).await;
    test_create_contract(repo.clone()).await;
    test_get_contract(repo.clone()).await;
    test_update_contract(repo.clone()).await;
    test_delete_contract(repo.clone()).await;
    test_list_contract(repo.clone()).await;
    test_distinct_ids_contract(repo.clone()).await;
}

fn sample(name: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        quantity: 10,
        price: 2.5,
        supplier: "Contract Supplies".to_string(),
    }
}

async fn test_health_check<R: ItemRepository>(repo: Arc<R>) {
    assert!(
        repo.health_check().await.is_ok(),
        "Health check should pass for healthy repository"
    );
}

async fn test_create_contract<R: ItemRepository>(repo: Arc<R>) {
    let candidate = sample("Contract Create");

    let created = repo.create(candidate.clone()).await.unwrap();

    // Verify item properties: everything carried over, ID assigned
    assert!(created.id > 0);
    assert_eq!(created.name, candidate.name);
    assert_eq!(created.quantity, candidate.quantity);
    assert_eq!(created.price, candidate.price);
    assert_eq!(created.supplier, candidate.supplier);
}

async fn test_get_contract<R: ItemRepository>(repo: Arc<R>) {
    let created = repo.create(sample("Contract Get")).await.unwrap();

    // Round-trip: get after create yields the created record
    let retrieved = repo.get(created.id).await.unwrap();
    assert_eq!(retrieved, Some(created));

    // Non-existent ID returns None (not error)
    let not_found = repo.get(99999).await.unwrap();
    assert!(not_found.is_none());
}

async fn test_update_contract<R: ItemRepository>(repo: Arc<R>) {
    let created = repo.create(sample("Contract Update")).await.unwrap();

    // Wholesale replacement of every non-ID field
    let replacement = NewItem {
        name: "Contract Updated".to_string(),
        quantity: 3,
        price: 9.99,
        supplier: "Replacement Supplies".to_string(),
    };
    let updated = repo
        .update(created.id, replacement.clone())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id); // ID should not change
    assert_eq!(updated.name, replacement.name);
    assert_eq!(updated.quantity, replacement.quantity);
    assert_eq!(updated.price, replacement.price);
    assert_eq!(updated.supplier, replacement.supplier);

    // Update persisted
    let retrieved = repo.get(created.id).await.unwrap().unwrap();
    assert_eq!(retrieved, updated);

    // Update on a non-existent ID returns None and mutates nothing
    let before: Vec<Item> = repo.list().await.unwrap();
    let absent = repo.update(99999, sample("Ghost")).await.unwrap();
    assert!(absent.is_none());
    let after: Vec<Item> = repo.list().await.unwrap();
    assert_eq!(before, after);
}

async fn test_delete_contract<R: ItemRepository>(repo: Arc<R>) {
    let created = repo.create(sample("Contract Delete")).await.unwrap();

    // First delete succeeds
    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.get(created.id).await.unwrap().is_none());

    // Second delete on the same ID reports absence
    assert!(!repo.delete(created.id).await.unwrap());

    // Delete on a non-existent ID returns false and mutates nothing
    let before = repo.list().await.unwrap();
    assert!(!repo.delete(99999).await.unwrap());
    let after = repo.list().await.unwrap();
    assert_eq!(before, after);
}

async fn test_list_contract<R: ItemRepository>(repo: Arc<R>) {
    let first = repo.create(sample("Contract List A")).await.unwrap();
    let second = repo.create(sample("Contract List B")).await.unwrap();

    let all = repo.list().await.unwrap();

    // Both items present, in a deterministic order (ascending ID)
    let positions: Vec<usize> = [first.id, second.id]
        .iter()
        .map(|id| all.iter().position(|i| i.id == *id).unwrap())
        .collect();
    assert!(positions[0] < positions[1]);

    let mut sorted = all.clone();
    sorted.sort_by_key(|i| i.id);
    assert_eq!(all, sorted, "list() must return ascending ID order");
}

async fn test_distinct_ids_contract<R: ItemRepository>(repo: Arc<R>) {
    let mut ids = Vec::new();
    for n in 0..5 {
        let created = repo.create(sample(&format!("Contract Ids {n}"))).await.unwrap();
        ids.push(created.id);
    }

    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before, "Assigned IDs must be pairwise distinct");
}

// Test the SQLite implementation against the contract
#[tokio::test]
async fn test_sqlite_repository_contract() {
    use database::SqliteItemRepository;

    // Use a unique database name to avoid conflicts with other tests
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let thread_id = std::thread::current().id();
    let db_name = format!(":memory:contract_{}_{:?}", timestamp, thread_id);

    let repo = SqliteItemRepository::new(&db_name).await.unwrap();
    repo.migrate().await.unwrap();

    test_repository_contract(Arc::new(repo)).await;
}
