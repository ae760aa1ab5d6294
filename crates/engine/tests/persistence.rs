//! Checkpoints written through a sled-backed pipeline survive a restart.

use oracle_config::OracleConfig;
use oracle_engine::{GasMeter, OraclePutPipeline};
use oracle_ledger::{FixedClock, SledCheckpointStore};
use oracle_primitives::Checkpoint;
use oracle_test_utils::{StaticVerifier, TestReporter, TEST_NOW};

#[test]
fn test_reopen_keeps_checkpoints() {
    let dir = tempfile::tempdir().unwrap();
    let config = OracleConfig::default();
    let reporter = TestReporter::default();

    {
        let store = SledCheckpointStore::open(dir.path()).unwrap();
        let mut pipeline = OraclePutPipeline::from_config(
            &config,
            store,
            StaticVerifier(true),
            FixedClock::new(TEST_NOW),
        );
        let signed = reporter.sign_prices(TEST_NOW - 5, &[("ETH", 700), ("BTC", 9000)]);
        pipeline
            .put(&signed.message, &signed.signature, &mut GasMeter::unlimited())
            .unwrap();
    }

    let store = SledCheckpointStore::open(dir.path()).unwrap();
    let mut pipeline =
        OraclePutPipeline::from_config(&config, store, StaticVerifier(true), FixedClock::new(TEST_NOW));
    assert_eq!(
        pipeline.get(&reporter.address(), "ETH"),
        Checkpoint::new(TEST_NOW - 5, 700)
    );

    // monotonicity is enforced against what was persisted
    let stale = reporter.sign_prices(TEST_NOW - 6, &[("ETH", 1)]);
    let receipt = pipeline
        .put(&stale.message, &stale.signature, &mut GasMeter::unlimited())
        .unwrap();
    assert_eq!(receipt.written(), 0);
    assert_eq!(
        pipeline.get(&reporter.address(), "ETH"),
        Checkpoint::new(TEST_NOW - 5, 700)
    );
}

#[test]
fn test_open_uses_configured_datadir() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = OracleConfig::default();
    config.ledger.datadir = Some(dir.path().to_path_buf());
    let reporter = TestReporter::default();

    {
        let mut pipeline =
            OraclePutPipeline::open(&config, StaticVerifier(true), FixedClock::new(TEST_NOW))
                .unwrap();
        assert!(pipeline.ledger().store().is_durable());
        let signed = reporter.sign_prices(TEST_NOW - 5, &[("ETH", 700)]);
        pipeline
            .put(&signed.message, &signed.signature, &mut GasMeter::unlimited())
            .unwrap();
    }

    let pipeline =
        OraclePutPipeline::open(&config, StaticVerifier(true), FixedClock::new(TEST_NOW)).unwrap();
    assert_eq!(
        pipeline.get(&reporter.address(), "ETH"),
        Checkpoint::new(TEST_NOW - 5, 700)
    );
}

#[test]
fn test_open_without_datadir_is_in_memory() {
    let config = OracleConfig::default();
    let pipeline =
        OraclePutPipeline::open(&config, StaticVerifier(true), FixedClock::new(TEST_NOW)).unwrap();
    assert!(!pipeline.ledger().store().is_durable());
}
