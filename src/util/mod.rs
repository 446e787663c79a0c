//! Shared utility helpers.

pub(crate) mod bytes;
pub mod error;
pub(crate) mod math;

pub use error::{FlowCmpError, FlowCmpResult};
