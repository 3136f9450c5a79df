//! Output formatting for extraction results and templates.

use crate::cli::OutputFormat;
use sfc_extract::{ParseResult, PropertyDescriptor, StyleBlock};
use sfc_templates::Template;

/// Formatter for command output.
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a list of props.
    pub fn properties(&self, properties: &[PropertyDescriptor]) -> String {
        match self.format {
            OutputFormat::Human => properties_human(properties),
            OutputFormat::Json => to_json(&properties),
        }
    }

    /// Render a list of style blocks.
    pub fn styles(&self, styles: &[StyleBlock]) -> String {
        match self.format {
            OutputFormat::Human => styles_human(styles),
            OutputFormat::Json => to_json(&styles),
        }
    }

    /// Render a full extraction result.
    pub fn parse_result(&self, result: &ParseResult) -> String {
        match self.format {
            OutputFormat::Human => format!(
                "Props\n{}\n\nStyles\n{}",
                properties_human(&result.properties),
                styles_human(&result.styles)
            ),
            OutputFormat::Json => to_json(result),
        }
    }

    /// Render a template listing.
    pub fn templates<'a>(&self, templates: impl IntoIterator<Item = &'a Template>) -> String {
        match self.format {
            OutputFormat::Human => templates
                .into_iter()
                .map(|t| format!("\x1b[1m{}\x1b[0m  {}", t.name, t.description))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Json => {
                let listing: Vec<_> = templates
                    .into_iter()
                    .map(|t| {
                        serde_json::json!({
                            "id": t.id,
                            "name": t.name,
                            "description": t.description
                        })
                    })
                    .collect();
                to_json(&listing)
            }
        }
    }

    /// Render a single template with its code.
    pub fn template(&self, template: &Template) -> String {
        match self.format {
            OutputFormat::Human => template.code.clone(),
            OutputFormat::Json => to_json(template),
        }
    }

    /// Render component source produced by a rewrite.
    pub fn source(&self, source: &str) -> String {
        match self.format {
            OutputFormat::Human => source.to_string(),
            OutputFormat::Json => serde_json::json!({ "source": source }).to_string(),
        }
    }
}

fn properties_human(properties: &[PropertyDescriptor]) -> String {
    if properties.is_empty() {
        return "  (none)".to_string();
    }
    properties
        .iter()
        .map(|p| {
            if p.has_default() {
                format!("  {}: {} = {:?}", p.name, p.ty, p.default)
            } else {
                format!("  {}: {}", p.name, p.ty)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn styles_human(styles: &[StyleBlock]) -> String {
    if styles.is_empty() {
        return "  (none)".to_string();
    }
    styles
        .iter()
        .enumerate()
        .map(|(i, style)| {
            let scope = if style.scoped { " (scoped)" } else { "" };
            let body = style
                .content
                .lines()
                .map(|line| format!("    {}", line))
                .collect::<Vec<_>>()
                .join("\n");
            format!("  #{}{}\n{}", i + 1, scope, body)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        serde_json::json!({ "error": e.to_string() }).to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn props() -> Vec<PropertyDescriptor> {
        vec![
            PropertyDescriptor::string("title", "Hello"),
            PropertyDescriptor::string("count", ""),
        ]
    }

    #[test]
    fn test_properties_human() {
        let out = OutputFormatter::new(OutputFormat::Human).properties(&props());
        assert_eq!(out, "  title: string = \"Hello\"\n  count: string");
    }

    #[test]
    fn test_properties_json_uses_type_key() {
        let out = OutputFormatter::new(OutputFormat::Json).properties(&props());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["type"], "string");
        assert_eq!(value[0]["default"], "Hello");
        assert_eq!(value[1]["name"], "count");
    }

    #[test]
    fn test_styles_human() {
        let styles = vec![StyleBlock::scoped("a {}\nb {}")];
        let out = OutputFormatter::new(OutputFormat::Human).styles(&styles);
        assert_eq!(out, "  #1 (scoped)\n    a {}\n    b {}");
    }

    #[test]
    fn test_empty_parse_result() {
        let out = OutputFormatter::new(OutputFormat::Human).parse_result(&ParseResult::default());
        assert_eq!(out, "Props\n  (none)\n\nStyles\n  (none)");
    }

    #[test]
    fn test_source_json() {
        let out = OutputFormatter::new(OutputFormat::Json).source("<template/>");
        assert_eq!(out, r#"{"source":"<template/>"}"#);
    }
}
