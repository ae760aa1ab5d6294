//! Data types shared by every layer of the oracle: symbols, fixed-point
//! prices, checkpoints and the message digest.

pub mod checkpoint;
pub mod errors;
pub mod hash;
pub mod price;
pub mod symbol;

pub use alloy_primitives::{Address, B256};
pub use checkpoint::{Checkpoint, CheckpointKey};
pub use errors::SymbolError;
pub use price::{FixedPoint, PRICE_DECIMALS, PRICE_SCALE};
pub use symbol::{Symbol, MAX_SYMBOL_LEN};

/// Unix timestamp in seconds, as carried by signed messages.
pub type Timestamp = u64;
