//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use protean_workflow::prelude::*;
//! ```

pub use crate::error::{WorkflowError, WorkflowResult};
pub use crate::mapping::{Mapping, MappingPair};
pub use crate::sanitize::{ensure_csv_options, sanitize_step, sanitize_steps};
pub use crate::step::{
    AuthConfig, EntityFilter, FormatConfig, FormatOptions, FormatType, FromDef, OutputMode,
    SourceDef, StepDef, ToDef, Transform, WriteMode,
};
pub use crate::validate::ValidationError;
pub use crate::workflow::{WorkflowConfig, WorkflowRecord};
