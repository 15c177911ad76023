//! Structural validation of step definitions.
//!
//! The sanitizer repairs payloads; validation reports what a repaired step
//! is still missing before it can run. Editors surface these errors next to
//! the offending form section.

use crate::entity::EntityDefinition;
use crate::step::{FromDef, OutputMode, SourceDef, StepDef, ToDef, Transform};
use crate::workflow::WorkflowConfig;

/// Validation errors for step definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An entity source names no entity definition.
    #[error("source entity definition is empty")]
    EmptySourceEntity,
    /// An entity destination names no entity definition.
    #[error("destination entity definition is empty")]
    EmptyDestinationEntity,
    /// An entity destination has no storage path.
    #[error("destination path is empty")]
    EmptyDestinationPath,
    /// A matching write mode has no update key.
    #[error("write mode {0} requires an update key")]
    MissingUpdateKey(&'static str),
    /// A push output has no destination address.
    #[error("push output has no destination")]
    EmptyPushDestination,
    /// A uri source has no uri.
    #[error("uri source has no uri")]
    MissingSourceUri,
    /// A transform writes to no target field.
    #[error("transform has no target field")]
    EmptyTransformTarget,
    /// A referenced field does not exist on the entity definition.
    #[error("field {field} does not exist on entity definition {entity}")]
    UnknownField {
        /// The missing field.
        field: String,
        /// The entity definition checked against.
        entity: String,
    },
    /// A step inside a workflow config failed validation.
    #[error("step {index}: {error}")]
    Step {
        /// Zero-based index of the failing step.
        index: usize,
        /// The underlying error.
        error: Box<ValidationError>,
    },
}

impl StepDef {
    /// Validates the step's structure.
    ///
    /// Checks that:
    /// - entity references name an entity definition
    /// - matching write modes carry an update key
    /// - push outputs carry a destination
    /// - uri sources carry a uri
    /// - transforms carry a target field
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.from {
            FromDef::Entity {
                entity_definition, ..
            } => {
                if entity_definition.is_empty() {
                    return Err(ValidationError::EmptySourceEntity);
                }
            }
            FromDef::Format { source, .. } => {
                if let SourceDef::Uri { config, .. } = source {
                    if config.uri.as_deref().unwrap_or_default().is_empty() {
                        return Err(ValidationError::MissingSourceUri);
                    }
                }
            }
        }

        if !matches!(self.transform, Transform::None)
            && self.transform.target().unwrap_or_default().is_empty()
        {
            return Err(ValidationError::EmptyTransformTarget);
        }

        match &self.to {
            ToDef::Entity {
                entity_definition,
                path,
                mode,
                update_key,
                ..
            } => {
                if entity_definition.is_empty() {
                    return Err(ValidationError::EmptyDestinationEntity);
                }
                if path.is_empty() {
                    return Err(ValidationError::EmptyDestinationPath);
                }
                if mode.requires_update_key()
                    && update_key.as_deref().unwrap_or_default().is_empty()
                {
                    return Err(ValidationError::MissingUpdateKey((*mode).into()));
                }
            }
            ToDef::Format { output, .. } => {
                if let OutputMode::Push { destination, .. } = output {
                    if destination.is_empty() {
                        return Err(ValidationError::EmptyPushDestination);
                    }
                }
            }
        }

        Ok(())
    }

    /// Validates the step against the entity definition it reads or writes.
    ///
    /// On top of [`StepDef::validate`], checks that an entity filter's field
    /// and an entity destination's update key exist on the definition.
    pub fn validate_against(&self, definition: &EntityDefinition) -> Result<(), ValidationError> {
        self.validate()?;

        if let FromDef::Entity {
            entity_definition,
            filter: Some(filter),
            ..
        } = &self.from
        {
            if entity_definition == &definition.name && !definition.has_field(&filter.field) {
                return Err(ValidationError::UnknownField {
                    field: filter.field.clone(),
                    entity: definition.name.clone(),
                });
            }
        }

        if let ToDef::Entity {
            entity_definition,
            update_key: Some(update_key),
            ..
        } = &self.to
        {
            if entity_definition == &definition.name && !definition.has_field(update_key) {
                return Err(ValidationError::UnknownField {
                    field: update_key.clone(),
                    entity: definition.name.clone(),
                });
            }
        }

        Ok(())
    }
}

impl WorkflowConfig {
    /// Validates every step, reporting the first failure with its index.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (index, step) in self.steps.iter().enumerate() {
            step.validate().map_err(|error| ValidationError::Step {
                index,
                error: Box::new(error),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityDefinition, FieldDef, FieldType};
    use crate::step::{EntityFilter, PushMethod, SourceDef, WriteMode};

    fn valid_step() -> StepDef {
        let mut step = StepDef::new();
        step.from = FromDef::Format {
            source: SourceDef::uri("https://example.com/data.csv"),
            format: crate::step::FormatConfig::csv(),
            mapping: crate::mapping::Mapping::new(),
        };
        step
    }

    fn orders_definition() -> EntityDefinition {
        EntityDefinition::new("orders")
            .with_field(FieldDef::new("id", FieldType::String).required())
            .with_field(FieldDef::new("total", FieldType::Float))
    }

    #[test]
    fn test_valid_step_passes() {
        assert!(valid_step().validate().is_ok());
    }

    #[test]
    fn test_default_step_missing_uri() {
        let step = StepDef::default();
        assert_eq!(step.validate(), Err(ValidationError::MissingSourceUri));
    }

    #[test]
    fn test_empty_source_entity() {
        let mut step = valid_step();
        step.from = FromDef::entity("");
        assert_eq!(step.validate(), Err(ValidationError::EmptySourceEntity));
    }

    #[test]
    fn test_update_mode_requires_update_key() {
        let mut step = valid_step();
        step.to = ToDef::Entity {
            entity_definition: "orders".into(),
            path: "/orders".into(),
            mode: WriteMode::Update,
            update_key: None,
            mapping: crate::mapping::Mapping::new(),
        };
        assert_eq!(
            step.validate(),
            Err(ValidationError::MissingUpdateKey("update"))
        );
    }

    #[test]
    fn test_push_output_requires_destination() {
        let mut step = valid_step();
        step.to = ToDef::Format {
            output: OutputMode::Push {
                destination: String::new(),
                method: PushMethod::Post,
            },
            format: crate::step::FormatConfig::json(),
            mapping: crate::mapping::Mapping::new(),
        };
        assert_eq!(step.validate(), Err(ValidationError::EmptyPushDestination));
    }

    #[test]
    fn test_transform_requires_target() {
        let mut step = valid_step();
        step.transform = Transform::Arithmetic {
            target: String::new(),
            left: crate::step::Operand::Field { name: "a".into() },
            right: crate::step::Operand::Const { value: 1.0 },
            op: crate::step::ArithmeticOp::Add,
        };
        assert_eq!(step.validate(), Err(ValidationError::EmptyTransformTarget));
    }

    #[test]
    fn test_validate_against_unknown_filter_field() {
        let mut step = valid_step();
        step.from = FromDef::Entity {
            entity_definition: "orders".into(),
            filter: Some(EntityFilter::eq("missing", 1)),
            mapping: crate::mapping::Mapping::new(),
        };
        let err = step.validate_against(&orders_definition()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownField {
                field: "missing".into(),
                entity: "orders".into(),
            }
        );
    }

    #[test]
    fn test_validate_against_known_update_key() {
        let mut step = valid_step();
        step.to = ToDef::Entity {
            entity_definition: "orders".into(),
            path: "/orders".into(),
            mode: WriteMode::CreateOrUpdate,
            update_key: Some("id".into()),
            mapping: crate::mapping::Mapping::new(),
        };
        assert!(step.validate_against(&orders_definition()).is_ok());
    }

    #[test]
    fn test_workflow_config_wraps_step_index() {
        let config = WorkflowConfig::new(vec![valid_step(), StepDef::default()]);
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::Step {
                index: 1,
                error: Box::new(ValidationError::MissingSourceUri),
            }
        );
        assert_eq!(err.to_string(), "step 1: uri source has no uri");
    }
}
