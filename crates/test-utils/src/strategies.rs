//! proptest strategies for oracle data.

use oracle_primitives::{Symbol, Timestamp, MAX_SYMBOL_LEN};
use proptest::prelude::*;

/// Any symbol the codec accepts.
pub fn any_symbol() -> impl Strategy<Value = Symbol> {
    proptest::collection::vec(any::<char>(), 1..=MAX_SYMBOL_LEN)
        .prop_map(|chars| {
            let mut s = String::new();
            for c in chars {
                if s.len() + c.len_utf8() > MAX_SYMBOL_LEN {
                    break;
                }
                s.push(c);
            }
            s
        })
        .prop_map(|s| Symbol::new(s).expect("test: generated symbol is valid"))
}

/// Timestamps within a day either side of `now`.
pub fn timestamp_near(now: Timestamp) -> impl Strategy<Value = Timestamp> {
    (now.saturating_sub(86_400))..=(now.saturating_add(86_400))
}

/// A list of `(symbol, value)` pairs drawn from a small ticker set so keys
/// collide often.
pub fn price_pairs(max: usize) -> impl Strategy<Value = Vec<(Symbol, u64)>> {
    let syms = prop_oneof![Just("ETH"), Just("BTC"), Just("ABC")]
        .prop_map(|s| Symbol::new(s).expect("test: fixed symbol"));
    proptest::collection::vec((syms, any::<u64>()), 1..=max)
}
