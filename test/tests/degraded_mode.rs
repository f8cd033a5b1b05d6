/// Degraded mode: every local decode, apply or registration failure stops
/// outbound sync for the rest of the session

use std::time::Duration;

use scenario_sync_client::{ScenarioSyncWorker, SyncConfig, SyncState};
use scenario_sync_shared::{
    ApplyError, DecodeError, GameMode, RegistrationError, SyncError, Timestamp,
    PROGRESSION_MODULE_NAME,
};
use scenario_sync_test::{
    assert_blocked, init_logging, node, payload, RecordingSender, TestModule, TestStore,
};

fn enabled_worker(
    game_mode: GameMode,
    store: TestStore,
) -> (ScenarioSyncWorker<TestStore, RecordingSender>, RecordingSender) {
    init_logging();
    let sender = RecordingSender::new();
    let mut worker =
        ScenarioSyncWorker::new(SyncConfig::default(), game_mode, store, sender.clone());
    worker.set_enabled(true);
    (worker, sender)
}

fn store_with_contracts() -> TestStore {
    TestStore::new().with_module(TestModule::new("ContractSystem", node(&[("update", "0")])))
}

fn assert_never_sends_again(
    worker: &mut ScenarioSyncWorker<TestStore, RecordingSender>,
    sender: &RecordingSender,
) {
    let before = sender.batch_count();
    for secs in [31, 100, 1_000, 100_000] {
        assert!(worker.tick(Timestamp::from_secs(secs)).is_none());
    }
    assert_eq!(sender.batch_count(), before);
}

#[test]
fn malformed_payload_blocks_sends() {
    let (mut worker, sender) = enabled_worker(GameMode::Sandbox, store_with_contracts());
    worker.enqueue("ContractSystem", "Contracts\n{\n\tupdate = 1\n");

    let report = worker.drain_and_apply();

    assert_eq!(report.failed, 1);
    assert_blocked!(worker);
    assert_eq!(
        worker.blocked_reason(),
        Some(&SyncError::Decode {
            module: "ContractSystem".to_string(),
            source: DecodeError::UnclosedNode {
                name: "Contracts".to_string()
            },
        })
    );
    assert_eq!(
        worker.store().get("ContractSystem").unwrap().load_count(),
        0,
        "undecodable entries never reach the module"
    );
    assert_never_sends_again(&mut worker, &sender);
}

#[test]
fn rejected_apply_blocks_sends() {
    let store = TestStore::new()
        .with_module(TestModule::new("ContractSystem", node(&[("update", "0")])).rejecting_loads());
    let (mut worker, sender) = enabled_worker(GameMode::Sandbox, store);
    worker.enqueue("ContractSystem", payload(&[("update", "1")]));

    worker.drain_and_apply();

    assert!(matches!(
        worker.blocked_reason(),
        Some(SyncError::Apply(ApplyError::Rejected { .. }))
    ));
    assert_never_sends_again(&mut worker, &sender);
}

#[test]
fn refused_registration_blocks_sends() {
    let store = store_with_contracts().refuse_registration("Funding");
    let (mut worker, sender) = enabled_worker(GameMode::Sandbox, store);
    worker.enqueue("Funding", payload(&[("funds", "1000")]));

    worker.drain_and_apply();

    assert!(matches!(
        worker.blocked_reason(),
        Some(SyncError::Registration(RegistrationError::Refused { .. }))
    ));
    assert_eq!(worker.store().count_named("Funding"), 0);
    assert_never_sends_again(&mut worker, &sender);
}

#[test]
fn failed_initialization_blocks_sends() {
    let store = store_with_contracts().fail_initialization("Funding");
    let (mut worker, sender) = enabled_worker(GameMode::Sandbox, store);
    worker.enqueue("Funding", payload(&[("funds", "1000")]));

    worker.drain_and_apply();

    assert!(matches!(
        worker.blocked_reason(),
        Some(SyncError::Registration(
            RegistrationError::InitializationFailed { .. }
        ))
    ));
    assert_never_sends_again(&mut worker, &sender);
}

#[test]
fn failed_bootstrap_blocks_and_is_not_retried() {
    let store = store_with_contracts().refuse_registration(PROGRESSION_MODULE_NAME);
    let (mut worker, sender) = enabled_worker(GameMode::Career, store);

    let first = worker.drain_and_apply();
    let second = worker.drain_and_apply();

    assert!(!first.bootstrapped);
    assert!(!second.bootstrapped);
    assert_blocked!(worker);
    assert_eq!(worker.store().registrations(), &[PROGRESSION_MODULE_NAME.to_string()]);
    assert_never_sends_again(&mut worker, &sender);
}

#[test]
fn first_error_is_kept() {
    let store = store_with_contracts().refuse_registration("Funding");
    let (mut worker, _) = enabled_worker(GameMode::Sandbox, store);
    worker.enqueue("ContractSystem", "}");
    worker.enqueue("Funding", payload(&[("funds", "1")]));

    let report = worker.drain_and_apply();

    assert_eq!(report.failed, 2);
    assert!(matches!(
        worker.blocked_reason(),
        Some(SyncError::Decode { .. })
    ));
}

#[test]
fn entries_are_still_drained_while_blocked() {
    let (mut worker, _) = enabled_worker(GameMode::Sandbox, store_with_contracts());
    worker.enqueue("ContractSystem", "}");
    worker.enqueue("ContractSystem", payload(&[("update", "2")]));
    worker.enqueue("Funding", payload(&[("funds", "5")]));

    let report = worker.drain_and_apply();

    assert_eq!(report.failed, 1);
    assert_eq!(report.applied, 1);
    assert_eq!(report.created, 1);
    assert_eq!(worker.pending_entries(), 0);
    assert_blocked!(worker);

    let contracts = worker.store().get("ContractSystem").unwrap();
    assert_eq!(contracts.payload().unwrap().get_value("update"), Some("2"));
}

#[test]
fn poison_entry_is_consumed_once() {
    let (mut worker, _) = enabled_worker(GameMode::Sandbox, store_with_contracts());
    worker.enqueue("ContractSystem", "}");

    assert_eq!(worker.drain_and_apply().failed, 1);
    assert_eq!(worker.drain_and_apply().failed, 0);
    assert_eq!(worker.pending_entries(), 0);
}

#[test]
fn block_takes_effect_between_flushes() {
    let (mut worker, sender) = enabled_worker(GameMode::Sandbox, store_with_contracts());
    let t = Timestamp::from_secs(100);

    assert!(worker.tick(t).is_some());
    worker.enqueue("ContractSystem", "}");
    worker.drain_and_apply();

    assert!(worker.tick(t + Duration::from_secs(31)).is_none());
    assert_eq!(sender.batch_count(), 1);
    assert!(matches!(worker.sync_state(), SyncState::Blocked(_)));
}
