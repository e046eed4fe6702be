//! Fixture factory: payload assembly with lazy dependency resolution
//!
//! Building a fixture for an entity whose required references have no value
//! creates the referenced entities first, recursively, and serializes the
//! resulting identifiers into the payload as foreign keys. Scalar fields get
//! generated values; caller overrides always win.

use serde_json::{Map, Value};
use tracing::debug;

use crate::catalog;
use crate::client::SatelliteClient;
use crate::descriptor::{EntityDescriptor, PathScope};
use crate::error::{EntityError, Result};
use crate::fields::FieldKind;

const DEFAULT_MAX_DEPTH: usize = 8;

type BoxedResult<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = Result<T>> + Send + 'a>>;

/// Builds and creates test fixtures for catalog entities
pub struct EntityFactory<'a> {
    client: &'a SatelliteClient,
    max_depth: usize,
}

impl<'a> EntityFactory<'a> {
    pub(crate) fn new(client: &'a SatelliteClient) -> Self {
        Self {
            client,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Cap the depth of the dependency chain walked while resolving references
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Assemble a create payload for `entity`.
    ///
    /// Overrides are validated against the entity's declaration and copied
    /// through under their wire names. Remaining required fields are filled:
    /// scalars with generated values, references by creating the target
    /// entity and taking its id.
    pub async fn build(
        &self,
        entity: &str,
        overrides: Map<String, Value>,
    ) -> Result<Map<String, Value>> {
        let desc = catalog::descriptor(entity)?;
        validate_overrides(desc, &overrides)?;
        self.build_fields(desc, overrides, 0).await
    }

    /// Build a payload and create the entity on the server
    pub async fn create(&self, entity: &str, overrides: Map<String, Value>) -> Result<Value> {
        self.create_scoped(entity, &PathScope::new(), overrides).await
    }

    /// Like [`EntityFactory::create`], for entities whose path template embeds
    /// parent-resource placeholders
    pub async fn create_scoped(
        &self,
        entity: &str,
        scope: &PathScope,
        overrides: Map<String, Value>,
    ) -> Result<Value> {
        let desc = catalog::descriptor(entity)?;
        validate_overrides(desc, &overrides)?;
        let payload = self.build_fields(desc, overrides, 0).await?;
        self.client.entity_create(entity, scope, payload).await
    }

    async fn build_fields(
        &self,
        desc: &'static EntityDescriptor,
        overrides: Map<String, Value>,
        depth: usize,
    ) -> Result<Map<String, Value>> {
        if depth > self.max_depth {
            return Err(EntityError::DependencyDepth(self.max_depth));
        }

        let mut values = Map::new();
        for field in desc.fields {
            let wire = field.wire_name();

            if let Some(given) = overrides
                .get(field.name)
                .or_else(|| overrides.get(wire.as_str()))
            {
                values.insert(wire, given.clone());
                continue;
            }
            if !field.required {
                continue;
            }
            if let Some(literal) = field.default {
                values.insert(wire, serde_json::from_str(literal)?);
                continue;
            }

            match field.kind {
                FieldKind::OneToOne(target) => {
                    let created = self.create_dependency(target, depth + 1).await?;
                    values.insert(wire, created_id(target, &created)?);
                }
                FieldKind::OneToMany(target) => {
                    let created = self.create_dependency(target, depth + 1).await?;
                    values.insert(wire, Value::Array(vec![created_id(target, &created)?]));
                }
                ref kind => {
                    let generated = {
                        let mut rng = rand::rng();
                        kind.generate(&mut rng)
                    };
                    if let Some(value) = generated {
                        values.insert(wire, value);
                    }
                }
            }
        }
        Ok(values)
    }

    fn create_dependency(&self, entity: &'static str, depth: usize) -> BoxedResult<'_, Value> {
        Box::pin(async move {
            debug!(entity, depth, "creating dependent entity");
            let desc = catalog::descriptor(entity)?;
            let payload = self.build_fields(desc, Map::new(), depth).await?;
            self.client
                .entity_create(entity, &PathScope::new(), payload)
                .await
        })
    }
}

fn created_id(entity: &str, attrs: &Value) -> Result<Value> {
    attrs.get("id").cloned().ok_or_else(|| {
        EntityError::UnexpectedResponse(format!(
            "create response for '{entity}' is missing an id"
        ))
    })
}

fn validate_overrides(desc: &EntityDescriptor, overrides: &Map<String, Value>) -> Result<()> {
    for (name, value) in overrides {
        let Some(field) = desc.field_by_any_name(name) else {
            return Err(EntityError::Validation {
                field: name.clone(),
                reason: format!("not a field of '{}'", desc.name),
            });
        };

        match field.kind {
            FieldKind::Str(spec) if !spec.choices.is_empty() => {
                if let Some(given) = value.as_str() {
                    if !spec.choices.contains(&given) {
                        return Err(EntityError::Validation {
                            field: name.clone(),
                            reason: format!("'{given}' is not one of {:?}", spec.choices),
                        });
                    }
                }
            }
            FieldKind::Integer { min, max } => {
                if let Some(given) = value.as_i64() {
                    if given < min || given > max {
                        return Err(EntityError::Validation {
                            field: name.clone(),
                            reason: format!("{given} is outside {min}..={max}"),
                        });
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}
