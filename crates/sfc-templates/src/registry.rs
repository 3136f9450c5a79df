//! Read-only template registry.

use crate::builtin::{builtin_templates, DEFAULT_TEMPLATE_NAME};
use crate::Template;

/// An immutable set of templates, built once and then only read.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    /// Create a registry from assembled templates.
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// A registry holding the built-in templates.
    pub fn builtin() -> Self {
        Self::new(builtin_templates())
    }

    /// Find the first template with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Find a template by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// The code of the default template, or an empty string.
    pub fn default_code(&self) -> &str {
        self.find_by_name(DEFAULT_TEMPLATE_NAME)
            .map(|t| t.code.as_str())
            .unwrap_or_default()
    }

    /// Iterate over templates in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemplateRegistry {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
