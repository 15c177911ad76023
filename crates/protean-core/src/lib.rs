#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//! # Protean Core
//!
//! This crate provides the foundational types shared by the protean
//! workspace: a structured error type with a category taxonomy that mirrors
//! how the platform's API reports failures, plus common aliases.

/// Tracing target for core operations.
pub const TRACING_TARGET: &str = "protean_core";

mod error;

pub use error::{BoxedError, Error, ErrorKind, Result};
