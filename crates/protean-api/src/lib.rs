#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod envelope;
mod pagination;
mod problem;

pub use envelope::{ApiEnvelope, ResponseStatus};
pub use pagination::PageMeta;
pub use problem::{ApiProblem, FieldViolations, ProblemKind, Violation};

/// Tracing target for api contract operations.
pub const TRACING_TARGET: &str = "protean_api";
