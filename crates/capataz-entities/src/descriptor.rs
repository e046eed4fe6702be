//! Entity descriptors and API path templating

use std::collections::HashMap;

use crate::error::{EntityError, Result};
use crate::fields::FieldDef;

/// Server deployment flavor an entity is available in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerMode {
    /// Full server (provisioning + content management)
    Sat,
    /// Subscription-management-only deployment
    Sam,
}

impl ServerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerMode::Sat => "sat",
            ServerMode::Sam => "sam",
        }
    }
}

/// Identifiers for the parent resources embedded in an entity's path template.
///
/// A template such as `katello/api/v2/repositories/:repository_id/content_uploads`
/// needs a `repository_id` before it can be turned into a concrete path.
#[derive(Clone, Debug, Default)]
pub struct PathScope(HashMap<String, String>);

impl PathScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a numeric parent id to a placeholder
    pub fn with_id(mut self, placeholder: &str, id: u64) -> Self {
        self.0.insert(placeholder.to_string(), id.to_string());
        self
    }

    /// Bind a textual path segment to a placeholder
    pub fn with(mut self, placeholder: &str, value: &str) -> Self {
        self.0.insert(placeholder.to_string(), value.to_string());
        self
    }

    pub fn get(&self, placeholder: &str) -> Option<&str> {
        self.0.get(placeholder).map(String::as_str)
    }
}

/// Declarative description of one server-side resource type
#[derive(Clone, Copy, Debug)]
pub struct EntityDescriptor {
    /// Entity name, snake_case singular (e.g. "content_view")
    pub name: &'static str,
    /// API path template, possibly with `:parent_id` placeholders
    pub api_path: &'static str,
    /// Root key the create payload must be nested under, when the server
    /// expects `{"architecture": {...}}` instead of a flat hash
    pub payload_root: Option<&'static str>,
    /// Server modes in which this resource exists
    pub server_modes: &'static [ServerMode],
    pub fields: &'static [FieldDef],
}

impl EntityDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look a field up by either its declared name or its wire name
    pub fn field_by_any_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields
            .iter()
            .find(|f| f.name == name || f.wire_name() == name)
    }

    pub fn available_in(&self, mode: ServerMode) -> bool {
        self.server_modes.contains(&mode)
    }

    /// Collection path with all placeholders substituted from `scope`
    pub fn base_path(&self, scope: &PathScope) -> Result<String> {
        let mut segments = Vec::new();
        for segment in self.api_path.split('/') {
            if let Some(placeholder) = segment.strip_prefix(':') {
                let value = scope
                    .get(placeholder)
                    .ok_or_else(|| EntityError::MissingParent(placeholder.to_string()))?;
                segments.push(value.to_string());
            } else {
                segments.push(segment.to_string());
            }
        }
        Ok(segments.join("/"))
    }

    /// Path of a single entity instance
    pub fn instance_path(&self, scope: &PathScope, id: u64) -> Result<String> {
        Ok(format!("{}/{}", self.base_path(scope)?, id))
    }

    /// Path of a server-defined action on an instance (e.g. `publish`, `sync`)
    pub fn action_path(&self, scope: &PathScope, id: u64, action: &str) -> Result<String> {
        Ok(format!("{}/{}", self.instance_path(scope, id)?, action))
    }
}

/// Plural form of an entity field name, as the server uses for nested
/// reference lists ("operatingsystem" -> "operatingsystems")
pub(crate) fn pluralize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix('y') {
        if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) {
            return format!("{stem}ies");
        }
    }
    if name.ends_with('s') || name.ends_with('x') || name.ends_with("ch") || name.ends_with("sh") {
        return format!("{name}es");
    }
    format!("{name}s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_base_path_without_placeholders() {
        let desc = catalog::descriptor("organization").expect("descriptor");
        let path = desc.base_path(&PathScope::new()).expect("path");
        assert_eq!(path, "katello/api/v2/organizations");
    }

    #[test]
    fn test_base_path_substitutes_parent_ids() {
        let desc = catalog::descriptor("content_upload").expect("descriptor");
        let scope = PathScope::new().with_id("repository_id", 5);
        assert_eq!(
            desc.base_path(&scope).expect("path"),
            "katello/api/v2/repositories/5/content_uploads"
        );
    }

    #[test]
    fn test_base_path_missing_parent() {
        let desc = catalog::descriptor("content_upload").expect("descriptor");
        let err = desc.base_path(&PathScope::new()).expect_err("should fail");
        assert!(matches!(err, EntityError::MissingParent(p) if p == "repository_id"));
    }

    #[test]
    fn test_textual_placeholder() {
        let desc = catalog::descriptor("custom_info").expect("descriptor");
        let scope = PathScope::new()
            .with("informable_type", "host")
            .with_id("informable_id", 3);
        assert_eq!(
            desc.base_path(&scope).expect("path"),
            "katello/api/v2/custom_info/host/3"
        );
    }

    #[test]
    fn test_instance_and_action_paths() {
        let desc = catalog::descriptor("content_view").expect("descriptor");
        let scope = PathScope::new();
        assert_eq!(
            desc.instance_path(&scope, 7).expect("path"),
            "katello/api/v2/content_views/7"
        );
        assert_eq!(
            desc.action_path(&scope, 7, "publish").expect("path"),
            "katello/api/v2/content_views/7/publish"
        );
    }

    #[test]
    fn test_server_mode_gating() {
        let org = catalog::descriptor("organization").expect("descriptor");
        assert!(org.available_in(ServerMode::Sat));
        assert!(org.available_in(ServerMode::Sam));

        let host = catalog::descriptor("host").expect("descriptor");
        assert!(host.available_in(ServerMode::Sat));
        assert!(!host.available_in(ServerMode::Sam));
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("repository"), "repositories");
        assert_eq!(pluralize("operatingsystem"), "operatingsystems");
        assert_eq!(pluralize("host_collection"), "host_collections");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("box"), "boxes");
    }
}
