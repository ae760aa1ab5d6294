//! Property tests for the put pipeline against a sequential model.

use std::collections::HashMap;

use oracle_engine::GasMeter;
use oracle_msg_fmt::PriceMessage;
use oracle_primitives::{Checkpoint, Symbol};
use oracle_test_utils::{
    mem_pipeline,
    strategies::{any_symbol, price_pairs, timestamp_near},
    StaticVerifier, TestReporter, TEST_NOW,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_checkpoints_match_sequential_model(
        batches in proptest::collection::vec((timestamp_near(TEST_NOW), price_pairs(4)), 1..6)
    ) {
        let mut pipeline = mem_pipeline(StaticVerifier(true), TEST_NOW);
        let reporter = TestReporter::from_seed(9);
        let mut model: HashMap<Symbol, Checkpoint> = HashMap::new();

        for (ts, pairs) in batches {
            let msg = PriceMessage::prices(ts, pairs.clone()).unwrap();
            let signed = reporter.sign(&msg);
            let receipt = pipeline
                .put(&signed.message, &signed.signature, &mut GasMeter::unlimited())
                .unwrap();
            prop_assert_eq!(receipt.events.len(), pairs.len());

            for ((sym, value), event) in pairs.into_iter().zip(&receipt.events) {
                let prior = model.get(&sym).copied().unwrap_or_default();
                let accept = ts < TEST_NOW + 3600 && ts > prior.timestamp();
                prop_assert_eq!(event.is_written(), accept);
                if accept {
                    model.insert(sym, Checkpoint::new(ts, value));
                }
            }
        }

        for (sym, cp) in &model {
            prop_assert_eq!(pipeline.get(&reporter.address(), sym.as_str()), *cp);
        }
    }

    #[test]
    fn test_any_valid_symbol_round_trips(symbol in any_symbol(), value in any::<u64>()) {
        let mut pipeline = mem_pipeline(StaticVerifier(true), TEST_NOW);
        let reporter = TestReporter::from_seed(3);
        let msg = PriceMessage::prices(TEST_NOW - 1, [(symbol.clone(), value)]).unwrap();
        let signed = reporter.sign(&msg);

        let receipt = pipeline
            .put(&signed.message, &signed.signature, &mut GasMeter::unlimited())
            .unwrap();
        prop_assert_eq!(receipt.written(), 1);
        prop_assert_eq!(
            pipeline.get(&reporter.address(), symbol.as_str()),
            Checkpoint::new(TEST_NOW - 1, value)
        );
    }
}
