//! Prop and style extraction for Vue Single File Components.
//!
//! This crate pulls declared props and `<style>` blocks out of component
//! source text and writes edits back into it: a new prop default or a new
//! set of style blocks. It works on the text directly and leaves every
//! untouched byte as it was.

pub mod error;
pub mod lexer;
pub mod props;
pub mod styles;
pub mod types;

pub use error::{ExtractError, ExtractErrorKind, ExtractResult};
pub use props::{parse_properties, rewrite_property_default, set_property_default};
pub use styles::{parse_styles, render_styles, rewrite_styles};
pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;

/// Extract props and styles, keeping extraction failures visible.
pub fn try_parse_component(source: &str) -> ExtractResult<ParseResult> {
    Ok(ParseResult {
        properties: parse_properties(source)?,
        styles: parse_styles(source)?,
    })
}

/// Extract props and styles.
///
/// Any extraction failure is logged and yields an empty result.
pub fn parse_component(source: &str) -> ParseResult {
    empty_on_error(try_parse_component(source))
}

fn empty_on_error(result: ExtractResult<ParseResult>) -> ParseResult {
    result.unwrap_or_else(|err| {
        tracing::warn!(%err, kind = %err.kind, "component extraction failed");
        ParseResult::default()
    })
}

pub(crate) fn compiled(
    pattern: &'static Lazy<Result<Regex, regex::Error>>,
) -> ExtractResult<&'static Regex> {
    Lazy::force(pattern)
        .as_ref()
        .map_err(ExtractError::invalid_pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_card_component() {
        let source = r#"<template>
  <el-card :header="title" class="card-component">
    <p>{{ content }}</p>
  </el-card>
</template>

<script setup>
const props = defineProps({
  title: {
    type: String,
    default: 'Card title'
  },
  content: {
    type: String,
    default: 'Card body text'
  }
})
</script>

<style scoped>
.card-component {
  max-width: 400px;
}
</style>
"#;
        let result = parse_component(source);
        assert_eq!(
            result,
            ParseResult {
                properties: vec![
                    PropertyDescriptor::string("title", "Card title"),
                    PropertyDescriptor::string("content", "Card body text"),
                ],
                styles: vec![StyleBlock::scoped(".card-component {\n  max-width: 400px;\n}")],
            }
        );
        assert_eq!(result.property("content").map(|p| p.default.as_str()), Some("Card body text"));
    }

    #[test]
    fn test_parse_empty_component() {
        let result = parse_component("");
        assert!(result.is_empty());
        assert_eq!(try_parse_component("").unwrap(), ParseResult::default());
    }

    #[test]
    fn test_failed_extraction_is_empty() {
        let err = ExtractError::new("boom", ExtractErrorKind::InvalidPattern);
        assert_eq!(empty_on_error(Err(err)), ParseResult::default());

        let parsed = try_parse_component("<style>a{}</style>");
        assert_eq!(empty_on_error(parsed).styles, vec![StyleBlock::new("a{}", false)]);
    }

    #[test]
    fn test_edit_cycle() {
        let source = "<script setup>\ndefineProps({ label: { type: String, default: 'Go' } })\n</script>";
        let edited = rewrite_property_default(source, "label", "Stop");
        let edited = rewrite_styles(&edited, &[StyleBlock::scoped("button { color: red; }")]);

        let result = parse_component(&edited);
        assert_eq!(result.properties, vec![PropertyDescriptor::string("label", "Stop")]);
        assert_eq!(result.styles, vec![StyleBlock::scoped("button { color: red; }")]);
    }
}
