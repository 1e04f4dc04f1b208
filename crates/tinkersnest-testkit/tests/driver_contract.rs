//! Every built-in driver passes the shared contract.

use std::sync::Arc;

use tinkersnest_store::{MemoryStore, SqliteStore, Store};
use tinkersnest_testkit::check_all;

#[tokio::test]
async fn memory_store_contract() {
    check_all(|| Arc::new(MemoryStore::new()) as Arc<dyn Store>).await;
}

#[tokio::test]
async fn sqlite_memory_contract() {
    check_all(|| Arc::new(SqliteStore::open_memory().unwrap()) as Arc<dyn Store>).await;
}

#[tokio::test]
async fn sqlite_file_contract() {
    let dir = tempfile::tempdir().unwrap();
    let counter = std::sync::atomic::AtomicUsize::new(0);

    check_all(|| {
        let n = counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let path = dir.path().join(format!("contract-{}.db", n));
        Arc::new(SqliteStore::open(path).unwrap()) as Arc<dyn Store>
    })
    .await;
}
