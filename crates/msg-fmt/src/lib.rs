//! Canonical wire format for signed price messages.
//!
//! ```text
//! tagLen: u8 ‖ tag ‖ timestamp: u64 ‖ count: u32 ‖ { symLen: u8 ‖ symbol ‖ value: u64 } × count
//! ```
//!
//! All integers are big-endian. Every accepted byte string re-encodes to
//! itself, so two distinct messages never share an encoding.

mod codec;
mod errors;
mod message;

pub use codec::{decode, encode, MIN_PAIR_LEN};
pub use errors::{CodecError, CodecResult};
pub use message::{MessageTag, PriceMessage, PriceObservation, MAX_PAIRS};
