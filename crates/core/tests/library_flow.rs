//! Reading list lifecycle integration tests.
//!
//! These tests exercise the full import flow with a mock remote catalog:
//! - search -> normalize -> add to library -> live snapshot updates
//! - status changes as replace-by-id
//! - supersession of stale search results
//! - status-filtered projections over live snapshots

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::watch;

use scaffale_core::{
    filter_by_status, normalize,
    testing::{fixtures, MockRemoteCatalog},
    BookCatalog, NormalizeContext, ReadingStatus, SearchController, SearchOptions, SearchPhase,
    SearchState, SqliteCatalog,
};

fn test_controller(remote: Arc<MockRemoteCatalog>) -> SearchController {
    SearchController::with_options(
        remote,
        SearchOptions {
            min_query_len: 3,
            debounce: Duration::ZERO,
        },
    )
}

async fn wait_for_phase(
    rx: &mut watch::Receiver<SearchState>,
    phase: SearchPhase,
) -> SearchState {
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            {
                let state = rx.borrow_and_update();
                if state.phase == phase {
                    return state.clone();
                }
            }
            rx.changed().await.expect("state channel closed");
        }
    })
    .await
    .expect("timed out waiting for search phase")
}

#[tokio::test]
async fn test_search_import_and_status_change_flow() -> Result<()> {
    let catalog = Arc::new(SqliteCatalog::in_memory()?);
    let remote = Arc::new(MockRemoteCatalog::new());
    remote
        .enqueue_results(vec![fixtures::search_candidate(
            "vol-dune",
            "Dune",
            "Frank Herbert",
        )])
        .await;

    let controller = test_controller(Arc::clone(&remote));
    let mut search_rx = controller.subscribe();
    let library_rx = catalog.observe_all();

    // Search the remote provider.
    controller.submit("dune");
    let search = wait_for_phase(&mut search_rx, SearchPhase::Success).await;
    assert_eq!(search.results.len(), 1);

    // Import the candidate: normalize, then persist.
    let entry = normalize(&search.results[0], NormalizeContext::DirectAdd);
    let stored = catalog.upsert(&entry)?;
    assert_eq!(stored.id, 1);
    assert_eq!(stored.status, ReadingStatus::ShouldRead);

    let snapshot = library_rx.borrow().clone();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "Dune");

    // Change status: replace by id, still a single entry.
    let mut update = stored.clone();
    update.status = ReadingStatus::Reading;
    catalog.upsert(&update)?;

    let snapshot = library_rx.borrow().clone();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, stored.id);
    assert_eq!(snapshot[0].status, ReadingStatus::Reading);

    Ok(())
}

#[tokio::test]
async fn test_manual_add_without_remote_search() -> Result<()> {
    let catalog = SqliteCatalog::in_memory()?;

    let stored = catalog.upsert(&fixtures::book(
        "Il Gattopardo",
        "Tomasi di Lampedusa",
        ReadingStatus::ShouldRead,
    ))?;
    assert!(stored.is_persisted());

    let snapshot = catalog.observe_all().borrow().clone();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].author, "Tomasi di Lampedusa");

    Ok(())
}

#[tokio::test]
async fn test_remove_is_idempotent_and_observed() -> Result<()> {
    let catalog = SqliteCatalog::in_memory()?;
    let rx = catalog.observe_all();

    let stored = catalog.upsert(&fixtures::book(
        "Dune",
        "Frank Herbert",
        ReadingStatus::Read,
    ))?;
    assert_eq!(rx.borrow().len(), 1);

    catalog.remove(&stored)?;
    assert!(rx.borrow().is_empty());

    // Second remove of the same entry is a silent no-op.
    catalog.remove(&stored)?;
    assert!(rx.borrow().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_stale_results_never_reach_the_library() -> Result<()> {
    let catalog = Arc::new(SqliteCatalog::in_memory()?);
    let remote = Arc::new(MockRemoteCatalog::new());

    // The first query is slow and loses; the second is fast and wins.
    remote
        .enqueue_results_after(
            Duration::from_millis(150),
            vec![fixtures::search_candidate("stale", "Stale Result", "Old")],
        )
        .await;
    remote
        .enqueue_results_after(
            Duration::from_millis(10),
            vec![fixtures::search_candidate("fresh", "Fresh Result", "New")],
        )
        .await;

    let controller = test_controller(Arc::clone(&remote));
    let mut search_rx = controller.subscribe();

    controller.submit("first query");
    controller.submit("second query");

    let search = wait_for_phase(&mut search_rx, SearchPhase::Success).await;
    tokio::time::sleep(Duration::from_millis(200)).await;

    // Import whatever the session shows; it must be the fresh result.
    let entry = normalize(&search.results[0], NormalizeContext::DirectAdd);
    let stored = catalog.upsert(&entry)?;
    assert_eq!(stored.title, "Fresh Result");

    let snapshot = catalog.observe_all().borrow().clone();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "Fresh Result");

    Ok(())
}

#[tokio::test]
async fn test_sparse_candidate_import_uses_placeholders() -> Result<()> {
    let catalog = SqliteCatalog::in_memory()?;
    let remote = Arc::new(MockRemoteCatalog::new());
    remote
        .enqueue_results(vec![fixtures::sparse_candidate("vol-sparse")])
        .await;

    let controller = test_controller(Arc::clone(&remote));
    let mut search_rx = controller.subscribe();

    controller.submit("mystery book");
    let search = wait_for_phase(&mut search_rx, SearchPhase::Success).await;

    let entry = normalize(&search.results[0], NormalizeContext::DirectAdd);
    let stored = catalog.upsert(&entry)?;

    assert_eq!(stored.title, "Untitled");
    assert_eq!(stored.author, "Unknown");
    assert_eq!(stored.status, ReadingStatus::ShouldRead);
    assert!(stored.description.is_none());
    assert!(stored.rating.is_none());

    Ok(())
}

#[tokio::test]
async fn test_filtered_projection_tracks_live_snapshots() -> Result<()> {
    let catalog = SqliteCatalog::in_memory()?;
    let rx = catalog.observe_all();

    let reading = catalog.upsert(&fixtures::book(
        "Dune",
        "Frank Herbert",
        ReadingStatus::Reading,
    ))?;
    catalog.upsert(&fixtures::book(
        "Neuromancer",
        "William Gibson",
        ReadingStatus::Read,
    ))?;

    let snapshot = rx.borrow().clone();
    let currently_reading = filter_by_status(&snapshot, Some(&ReadingStatus::Reading));
    assert_eq!(currently_reading.len(), 1);
    assert_eq!(currently_reading[0].title, "Dune");

    // Finish the book; the projection over the next snapshot moves it.
    let mut finished = reading.clone();
    finished.status = ReadingStatus::Read;
    catalog.upsert(&finished)?;

    let snapshot = rx.borrow().clone();
    assert!(filter_by_status(&snapshot, Some(&ReadingStatus::Reading)).is_empty());
    assert_eq!(
        filter_by_status(&snapshot, Some(&ReadingStatus::Read)).len(),
        2
    );

    Ok(())
}

#[tokio::test]
async fn test_concurrent_writers_settle_on_consistent_snapshot() -> Result<()> {
    let catalog = Arc::new(SqliteCatalog::in_memory()?);

    let mut handles = Vec::new();
    for i in 0..8 {
        let catalog = Arc::clone(&catalog);
        handles.push(tokio::task::spawn_blocking(move || {
            catalog.upsert(&fixtures::book(
                &format!("Book {}", i),
                "Author",
                ReadingStatus::ShouldRead,
            ))
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await??.id);
    }

    // Every insert got its own id and the final snapshot holds all of them.
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);

    let snapshot = catalog.observe_all().borrow().clone();
    assert_eq!(snapshot.len(), 8);

    // Snapshot stays ordered by descending id.
    let snapshot_ids: Vec<i64> = snapshot.iter().map(|b| b.id).collect();
    let mut sorted = snapshot_ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(snapshot_ids, sorted);

    Ok(())
}
