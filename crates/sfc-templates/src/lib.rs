//! Starter templates for Vue Single File Components.
//!
//! This crate provides:
//! - The built-in template catalog
//! - Template stores that fetch definitions over HTTP or from a directory
//! - A catalog that assembles loaded definitions into [`Template`] records
//! - A read-only registry for lookups by name or id

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod registry;
pub mod store;

pub use builtin::{blank_template, builtin_templates, example_template, DEFAULT_TEMPLATE_NAME};
pub use catalog::{TemplateCatalog, DEFAULT_TEMPLATE_IDS};
pub use error::{LoadError, LoadResult};
pub use registry::TemplateRegistry;
pub use store::{store_from_location, DirTemplateStore, HttpTemplateStore, TemplateStore};

use serde::{Deserialize, Serialize};
use sfc_extract::ParseResult;
use uuid::Uuid;

/// A template document as stored: `{ name, description, code }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    /// Display name.
    pub name: String,
    /// One-line description.
    #[serde(default)]
    pub description: String,
    /// Full component source.
    pub code: String,
}

/// A starter template offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Random UUID assigned when the template was assembled.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Full component source.
    pub code: String,
    /// Preview image. Never populated.
    pub preview: Option<String>,
}

impl Template {
    /// Assemble a template with a fresh id.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            code: code.into(),
            preview: None,
        }
    }

    /// Extract the props and styles of the template's code.
    pub fn parse(&self) -> ParseResult {
        sfc_extract::parse_component(&self.code)
    }
}

impl From<TemplateDefinition> for Template {
    fn from(definition: TemplateDefinition) -> Self {
        Template::new(definition.name, definition.description, definition.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_template_ids_are_fresh() {
        let a = Template::new("A", "", "<template/>");
        let b = Template::new("A", "", "<template/>");
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_eq!(a.preview, None);
    }

    #[test]
    fn test_definition_decodes_without_description() {
        let definition: TemplateDefinition =
            serde_json::from_str(r#"{ "name": "Tiny", "code": "<template/>" }"#).unwrap();
        let template = Template::from(definition);
        assert_eq!(template.name, "Tiny");
        assert_eq!(template.description, "");
        assert_eq!(template.code, "<template/>");
    }
}
