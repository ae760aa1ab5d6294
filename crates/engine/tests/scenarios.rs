//! End-to-end behaviour of the put pipeline.

use oracle_crypto::{PublicInputs, Proof, SignatureError};
use oracle_engine::{GasMeter, OracleError, OracleEvent};
use oracle_ledger::RejectReason;
use oracle_primitives::{Address, Checkpoint};
use oracle_test_utils::{mem_pipeline, StaticVerifier, TestReporter, REPORTER_ADDRESS, TEST_NOW};

const T: u64 = TEST_NOW - 60;

#[test]
fn test_read_before_any_write() {
    let pipeline = mem_pipeline(StaticVerifier(true), TEST_NOW);
    assert_eq!(pipeline.get(&Address::ZERO, "ETH"), Checkpoint::new(0, 0));
}

#[test]
fn test_put_with_proof_and_source() {
    let mut pipeline = mem_pipeline(StaticVerifier(true), TEST_NOW);
    let reporter = TestReporter::default();
    let signed = reporter.sign_prices(T, &[("ETH", 700)]);

    let receipt = pipeline
        .put_with_proof(
            &signed.message,
            &signed.signature,
            &Proof::new(vec![0xaa; 256]),
            &PublicInputs::from_values(&[700]),
            &mut GasMeter::unlimited(),
        )
        .unwrap();
    assert_eq!(receipt.reporter, reporter.address());
    assert_eq!(receipt.written(), 1);
    assert_eq!(pipeline.get(&reporter.address(), "ETH"), Checkpoint::new(T, 700));

    let source = pipeline.source(&signed.message, &signed.signature).unwrap();
    assert_eq!(source, reporter.address());
    assert_eq!(source.address().to_string().to_lowercase(), REPORTER_ADDRESS);

    let altered = reporter.sign_prices(T, &[("ETH", 701)]).message;
    let other = pipeline.source(&altered, &signed.signature).unwrap();
    assert_ne!(other, reporter.address());

    let err = pipeline
        .source(&signed.message, &signed.signature[..64])
        .unwrap_err();
    assert!(matches!(
        err,
        OracleError::InvalidSignature(SignatureError::InvalidLength { expected: 65, actual: 64 })
    ));
}

#[test]
fn test_stale_update_keeps_prior() {
    let mut pipeline = mem_pipeline(StaticVerifier(true), TEST_NOW);
    let reporter = TestReporter::default();
    let mut meter = GasMeter::unlimited();

    let first = reporter.sign_prices(T, &[("ABC", 100)]);
    pipeline.put(&first.message, &first.signature, &mut meter).unwrap();

    let older = reporter.sign_prices(T - 1, &[("ABC", 150)]);
    let receipt = pipeline.put(&older.message, &older.signature, &mut meter).unwrap();
    assert_eq!(
        receipt.events,
        vec![OracleEvent::NotWritten {
            reporter: reporter.address(),
            symbol: "ABC".parse().unwrap(),
            prior_timestamp: T,
            attempted_timestamp: T - 1,
            now: TEST_NOW,
            reason: RejectReason::StaleTimestamp,
        }]
    );
    assert_eq!(pipeline.get(&reporter.address(), "ABC"), Checkpoint::new(T, 100));
}

#[test]
fn test_future_timestamp_rejected() {
    let mut pipeline = mem_pipeline(StaticVerifier(true), TEST_NOW);
    let reporter = TestReporter::default();

    let signed = reporter.sign_prices(TEST_NOW + 3601, &[("ABC", 100)]);
    let receipt = pipeline
        .put(&signed.message, &signed.signature, &mut GasMeter::unlimited())
        .unwrap();
    assert_eq!(
        receipt.events[0].reject_reason(),
        Some(RejectReason::FutureTimestamp)
    );
    assert_eq!(pipeline.get(&reporter.address(), "ABC"), Checkpoint::new(0, 0));
}

#[test]
fn test_two_pairs_update_independently() {
    let mut pipeline = mem_pipeline(StaticVerifier(true), TEST_NOW);
    let reporter = TestReporter::default();
    let mut meter = GasMeter::unlimited();

    let first = reporter.sign_prices(T, &[("ABC", 100), ("BTC", 9000)]);
    let receipt = pipeline.put(&first.message, &first.signature, &mut meter).unwrap();
    assert_eq!(receipt.written(), 2);

    let second = reporter.sign_prices(T + 1, &[("ABC", 101), ("BTC", 9001)]);
    let receipt = pipeline.put(&second.message, &second.signature, &mut meter).unwrap();
    assert_eq!(receipt.written(), 2);

    assert_eq!(pipeline.get(&reporter.address(), "BTC"), Checkpoint::new(T + 1, 9001));
    assert_eq!(pipeline.get(&reporter.address(), "ABC"), Checkpoint::new(T + 1, 101));
}

#[test]
fn test_reporters_do_not_share_keys() {
    let mut pipeline = mem_pipeline(StaticVerifier(true), TEST_NOW);
    let alice = TestReporter::from_seed(1);
    let bob = TestReporter::from_seed(2);
    let mut meter = GasMeter::unlimited();

    let a = alice.sign_prices(T, &[("ETH", 1)]);
    pipeline.put(&a.message, &a.signature, &mut meter).unwrap();
    let b = bob.sign_prices(T - 100, &[("ETH", 2)]);
    let receipt = pipeline.put(&b.message, &b.signature, &mut meter).unwrap();

    assert_eq!(receipt.written(), 1);
    assert_eq!(pipeline.get(&alice.address(), "ETH"), Checkpoint::new(T, 1));
    assert_eq!(pipeline.get(&bob.address(), "ETH"), Checkpoint::new(T - 100, 2));
}

#[test]
fn test_stale_and_fresh_pair_in_one_batch() {
    let mut pipeline = mem_pipeline(StaticVerifier(true), TEST_NOW);
    let reporter = TestReporter::default();
    let mut meter = GasMeter::unlimited();

    let first = reporter.sign_prices(T, &[("ABC", 100)]);
    pipeline.put(&first.message, &first.signature, &mut meter).unwrap();

    let mixed = reporter.sign_prices(T - 10, &[("ABC", 150), ("BTC", 9000)]);
    let receipt = pipeline.put(&mixed.message, &mixed.signature, &mut meter).unwrap();
    assert_eq!(
        receipt.events[0].reject_reason(),
        Some(RejectReason::StaleTimestamp)
    );
    assert!(receipt.events[1].is_written());

    assert_eq!(pipeline.get(&reporter.address(), "ABC"), Checkpoint::new(T, 100));
    assert_eq!(pipeline.get(&reporter.address(), "BTC"), Checkpoint::new(T - 10, 9000));
}
