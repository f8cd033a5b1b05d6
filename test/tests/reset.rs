/// Session reset

use std::time::Duration;

use scenario_sync_client::{ScenarioSyncWorker, SyncConfig, SyncState};
use scenario_sync_shared::{GameMode, Timestamp, PROGRESSION_MODULE_NAME};
use scenario_sync_test::{init_logging, node, payload, RecordingSender, TestModule, TestStore};

fn career_worker() -> (ScenarioSyncWorker<TestStore, RecordingSender>, RecordingSender) {
    init_logging();
    let store = TestStore::new()
        .with_module(TestModule::new("ContractSystem", node(&[("update", "0")])));
    let sender = RecordingSender::new();
    let mut worker =
        ScenarioSyncWorker::new(SyncConfig::default(), GameMode::Career, store, sender.clone());
    worker.set_enabled(true);
    (worker, sender)
}

#[test]
fn reset_clears_all_worker_state() {
    let (mut worker, _) = career_worker();
    worker.tick(Timestamp::from_secs(100));
    worker.enqueue("ContractSystem", "}");
    worker.drain_and_apply();
    worker.enqueue("Funding", payload(&[("funds", "1")]));

    assert!(worker.is_blocked());
    assert!(worker.progression_loaded());
    assert_eq!(worker.pending_entries(), 1);

    worker.reset();

    assert_eq!(worker.sync_state(), &SyncState::Normal);
    assert!(worker.blocked_reason().is_none());
    assert!(!worker.progression_loaded());
    assert_eq!(worker.pending_entries(), 0);
    assert_eq!(worker.last_flush(), Timestamp::ZERO);
    assert!(!worker.is_enabled());
}

#[test]
fn sends_resume_after_reset_and_enable() {
    let (mut worker, sender) = career_worker();
    worker.enqueue("ContractSystem", "}");
    worker.drain_and_apply();
    assert!(worker.tick(Timestamp::from_secs(100)).is_none());

    worker.reset();
    worker.set_enabled(true);

    assert!(worker.tick(Timestamp::from_secs(100)).is_some());
    assert_eq!(sender.batch_count(), 1);
}

#[test]
fn flush_timer_restarts_from_origin() {
    let (mut worker, sender) = career_worker();
    worker.tick(Timestamp::from_secs(100));

    worker.reset();
    worker.set_enabled(true);

    assert!(worker.tick(Timestamp::from_secs(20)).is_none());
    assert!(worker.tick(Timestamp::ZERO + Duration::from_secs(31)).is_some());
    assert_eq!(sender.batch_count(), 2);
}

#[test]
fn progression_bootstraps_again_after_reset() {
    let (mut worker, _) = career_worker();
    assert!(worker.drain_and_apply().bootstrapped);

    worker.reset();
    let report = worker.drain_and_apply();

    // the host keeps its module across the reset, so only the flag is restored
    assert!(!report.bootstrapped);
    assert!(worker.progression_loaded());
    assert_eq!(worker.store().count_named(PROGRESSION_MODULE_NAME), 1);
}

#[test]
fn queued_entries_are_discarded_by_reset() {
    let (mut worker, _) = career_worker();
    worker.enqueue("Funding", payload(&[("funds", "1")]));

    worker.reset();
    worker.drain_and_apply();

    assert_eq!(worker.store().count_named("Funding"), 0);
}
