//! Verification-and-checkpoint engine for signed price messages.
//!
//! [`OraclePutPipeline`] ties the pieces together: optional proof check,
//! message decoding, signer recovery and the per-key checkpoint ledger. All
//! work is charged to an explicit [`ResourceMeter`].

pub mod errors;
pub mod events;
pub mod meter;
pub mod pipeline;

pub use errors::{OracleError, OracleResult};
pub use events::OracleEvent;
pub use meter::{GasMeter, MeterError, MeteredOp, ResourceMeter};
pub use pipeline::{OraclePutPipeline, PutReceipt};
