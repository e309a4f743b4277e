use super::*;

fn request(name: &str, price: i64, company: &str) -> StockRequest {
    StockRequest {
        name: name.to_string(),
        price,
        company: company.to_string(),
    }
}

// ============================================================================
// Insert Tests
// ============================================================================

#[tokio::test]
async fn test_insert_assigns_ascending_ids_from_one() {
    let store = MemoryStockStore::new();

    let first = store.insert(&request("ACME", 100, "ACME Corp")).await.unwrap();
    let second = store.insert(&request("GLOBEX", 250, "Globex Inc")).await.unwrap();
    let third = store.insert(&request("INIT", 75, "Initech")).await.unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(third, 3);
}

#[tokio::test]
async fn test_insert_then_fetch_round_trip() {
    let store = MemoryStockStore::new();

    let id = store.insert(&request("ACME", 100, "ACME Corp")).await.unwrap();
    let stock = store.fetch_by_id(id).await.unwrap().unwrap();

    assert_eq!(stock.stockid, id);
    assert_eq!(stock.name, "ACME");
    assert_eq!(stock.price, 100);
    assert_eq!(stock.company, "ACME Corp");
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let store = MemoryStockStore::new();

    let first = store.insert(&request("ACME", 100, "ACME Corp")).await.unwrap();
    store.delete_by_id(first).await.unwrap();
    let second = store.insert(&request("GLOBEX", 250, "Globex Inc")).await.unwrap();

    assert_eq!(second, first + 1);
}

// ============================================================================
// Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_by_id_missing_returns_none() {
    let store = MemoryStockStore::new();

    let result = store.fetch_by_id(42).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_fetch_all_empty_store_returns_empty_vec() {
    let store = MemoryStockStore::new();

    let stocks = store.fetch_all().await.unwrap();

    assert!(stocks.is_empty());
}

#[tokio::test]
async fn test_fetch_all_returns_every_stock_ordered_by_id() {
    let store = MemoryStockStore::new();

    store.insert(&request("ACME", 100, "ACME Corp")).await.unwrap();
    store.insert(&request("GLOBEX", 250, "Globex Inc")).await.unwrap();
    store.insert(&request("INIT", 75, "Initech")).await.unwrap();

    let stocks = store.fetch_all().await.unwrap();

    assert_eq!(stocks.len(), 3);
    assert_eq!(stocks[0].stockid, 1);
    assert_eq!(stocks[1].stockid, 2);
    assert_eq!(stocks[2].stockid, 3);
    assert_eq!(stocks[1].name, "GLOBEX");
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_replaces_every_field() {
    let store = MemoryStockStore::new();

    let id = store.insert(&request("ACME", 100, "ACME Corp")).await.unwrap();
    let affected = store
        .update_by_id(id, &request("ACME-NEW", 120, "ACME Holdings"))
        .await
        .unwrap();

    assert_eq!(affected, 1);

    let stock = store.fetch_by_id(id).await.unwrap().unwrap();
    assert_eq!(stock.stockid, id);
    assert_eq!(stock.name, "ACME-NEW");
    assert_eq!(stock.price, 120);
    assert_eq!(stock.company, "ACME Holdings");
}

#[tokio::test]
async fn test_update_missing_id_affects_zero_rows() {
    let store = MemoryStockStore::new();

    let affected = store
        .update_by_id(42, &request("ACME", 100, "ACME Corp"))
        .await
        .unwrap();

    assert_eq!(affected, 0);
}

#[tokio::test]
async fn test_update_leaves_other_rows_untouched() {
    let store = MemoryStockStore::new();

    let first = store.insert(&request("ACME", 100, "ACME Corp")).await.unwrap();
    let second = store.insert(&request("GLOBEX", 250, "Globex Inc")).await.unwrap();

    store
        .update_by_id(second, &request("GLOBEX-NEW", 300, "Globex Intl"))
        .await
        .unwrap();

    let untouched = store.fetch_by_id(first).await.unwrap().unwrap();
    assert_eq!(untouched.name, "ACME");
    assert_eq!(untouched.price, 100);
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_existing_then_missing() {
    let store = MemoryStockStore::new();

    let id = store.insert(&request("ACME", 100, "ACME Corp")).await.unwrap();

    let first = store.delete_by_id(id).await.unwrap();
    let second = store.delete_by_id(id).await.unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 0);
    assert!(store.fetch_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_removes_only_the_matching_row() {
    let store = MemoryStockStore::new();

    let first = store.insert(&request("ACME", 100, "ACME Corp")).await.unwrap();
    let second = store.insert(&request("GLOBEX", 250, "Globex Inc")).await.unwrap();

    store.delete_by_id(first).await.unwrap();

    let stocks = store.fetch_all().await.unwrap();
    assert_eq!(stocks.len(), 1);
    assert_eq!(stocks[0].stockid, second);
}
