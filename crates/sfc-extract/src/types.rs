//! Records produced by prop and style extraction.

/// The type reported for every extracted prop.
pub const STRING_PROP_TYPE: &str = "string";

/// A prop declared by a component.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyDescriptor {
    /// The prop name, unique within one parse.
    pub name: String,
    /// The prop type. Always [`STRING_PROP_TYPE`].
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: String,
    /// The declared default value, or empty.
    pub default: String,
}

impl PropertyDescriptor {
    /// Create a string prop with the given default.
    pub fn string(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: STRING_PROP_TYPE.to_string(),
            default: default.into(),
        }
    }

    /// Check whether a default value was found.
    pub fn has_default(&self) -> bool {
        !self.default.is_empty()
    }
}

/// A `<style>` block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleBlock {
    /// The text between the tags, trimmed.
    pub content: String,
    /// Whether the opening tag carries the `scoped` attribute.
    pub scoped: bool,
}

impl StyleBlock {
    /// Create a new style block.
    pub fn new(content: impl Into<String>, scoped: bool) -> Self {
        Self {
            content: content.into(),
            scoped,
        }
    }

    /// Create a scoped style block.
    pub fn scoped(content: impl Into<String>) -> Self {
        Self::new(content, true)
    }
}

/// Everything extracted from one component source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    /// Props in first-match order.
    pub properties: Vec<PropertyDescriptor>,
    /// Style blocks in source order.
    pub styles: Vec<StyleBlock>,
}

impl ParseResult {
    /// Look up a prop by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.styles.is_empty()
    }
}
