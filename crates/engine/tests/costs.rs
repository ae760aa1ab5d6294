//! The default cost schedule stays under the published ceilings.

use oracle_engine::GasMeter;
use oracle_test_utils::{mem_pipeline, StaticVerifier, TestReporter, TEST_NOW};

const T: u64 = TEST_NOW - 60;

const SINGLE_WRITE_CEILING: u64 = 86_000;
const UPDATE_CEILING: u64 = 75_000;

#[test]
fn test_single_write_cost() {
    let mut pipeline = mem_pipeline(StaticVerifier(true), TEST_NOW);
    let reporter = TestReporter::default();
    let signed = reporter.sign_prices(T, &[("ETH", 700)]);

    let receipt = pipeline
        .put(&signed.message, &signed.signature, &mut GasMeter::unlimited())
        .unwrap();
    assert!(
        receipt.cost < SINGLE_WRITE_CEILING,
        "single write cost {} units",
        receipt.cost
    );
}

#[test]
fn test_two_pair_update_cost() {
    let mut pipeline = mem_pipeline(StaticVerifier(true), TEST_NOW);
    let reporter = TestReporter::default();
    let mut meter = GasMeter::unlimited();

    let first = reporter.sign_prices(T, &[("ABC", 100), ("BTC", 9000)]);
    pipeline.put(&first.message, &first.signature, &mut meter).unwrap();

    let second = reporter.sign_prices(T + 1, &[("ABC", 101), ("BTC", 9001)]);
    let receipt = pipeline
        .put(&second.message, &second.signature, &mut meter)
        .unwrap();
    assert_eq!(receipt.written(), 2);
    assert!(
        receipt.cost < UPDATE_CEILING,
        "two-pair update cost {} units",
        receipt.cost
    );
}

#[test]
fn test_rejected_pair_is_cheaper_than_write() {
    let mut pipeline = mem_pipeline(StaticVerifier(true), TEST_NOW);
    let reporter = TestReporter::default();
    let mut meter = GasMeter::unlimited();

    let first = reporter.sign_prices(T, &[("ETH", 1)]);
    let written = pipeline.put(&first.message, &first.signature, &mut meter).unwrap();
    let stale = reporter.sign_prices(T - 1, &[("ETH", 2)]);
    let rejected = pipeline.put(&stale.message, &stale.signature, &mut meter).unwrap();

    assert_eq!(rejected.written(), 0);
    assert!(rejected.cost < written.cost);
}
