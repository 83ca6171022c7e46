//! Application-level configuration.
//!
//! - [`ExecutionParams`]: handler and classifier timeouts

pub mod execution_params;

pub use execution_params::ExecutionParams;
