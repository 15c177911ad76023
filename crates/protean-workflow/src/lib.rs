#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod entity;
mod error;
pub mod mapping;
pub mod sanitize;
pub mod step;
mod validate;
pub mod workflow;

#[doc(hidden)]
pub mod prelude;

pub use error::{WorkflowError, WorkflowResult};
pub use validate::ValidationError;

/// Tracing target for workflow definition operations.
pub const TRACING_TARGET: &str = "protean_workflow";
