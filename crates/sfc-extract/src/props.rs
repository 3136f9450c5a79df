//! Prop extraction and prop default rewriting.
//!
//! Props are found by pattern matching over the whole component text.
//! Object bodies are delimited by the brace-aware [`crate::lexer`], so a
//! `default:` that belongs to a nested object never leaks to an outer name.

use crate::compiled;
use crate::error::{ExtractError, ExtractResult};
use crate::lexer::{
    is_identifier, matching_brace, object_entries, single_quoted, QuotedLiteral, Scanner,
};
use crate::types::PropertyDescriptor;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Character classes of a prop name. They accept exactly what
/// [`is_identifier`] accepts.
const IDENT_START: &str = r"\p{Alphabetic}_$";
const IDENT_CONTINUE: &str = r"\p{Alphabetic}\p{N}_$";

/// `name: {`
static PROP_OBJECT_HEAD: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| {
    Regex::new(&format!(
        r"([{IDENT_START}][{IDENT_CONTINUE}]*)\s*:\s*\{{"
    ))
});

/// `name: {` or `name: String|Number|Boolean`
static PROP_LOOSE_HEAD: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| {
    Regex::new(&format!(
        r"([{IDENT_START}][{IDENT_CONTINUE}]*)\s*:\s*(?:(\{{)|(?:String|Number|Boolean)\b)"
    ))
});

/// Keys that mark an object literal as a prop definition rather than a
/// container of props.
const PROP_OPTION_KEYS: &[&str] = &["type", "default", "required", "validator"];

/// Extract the props declared in component source.
///
/// The first pass records every `name: { ... default: '<text>' }`
/// definition. Only when it finds nothing does a looser pass pick up
/// `name: { ... }` definitions without a quoted default and
/// `name: String|Number|Boolean` shorthands. Names are deduplicated and
/// the first occurrence wins.
pub fn parse_properties(source: &str) -> ExtractResult<Vec<PropertyDescriptor>> {
    let mut props = scan_quoted_defaults(source)?;
    if props.is_empty() {
        props = scan_declarations(source)?;
    }

    for prop in &props {
        tracing::debug!(name = %prop.name, default = %prop.default, "discovered prop");
    }
    tracing::debug!(count = props.len(), "prop extraction finished");

    Ok(props)
}

fn scan_quoted_defaults(source: &str) -> ExtractResult<Vec<PropertyDescriptor>> {
    let head = compiled(&PROP_OBJECT_HEAD)?;
    let mut props = Vec::new();
    let mut pos = 0;

    while let Some(caps) = head.captures_at(source, pos) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let open = whole.end() - 1;
        pos = open + 1;

        let Some(close) = matching_brace(source, open) else {
            continue;
        };
        let body = open + 1..close;
        if let Some(literal) = quoted_default(source, body.clone()) {
            push_unique(&mut props, name.as_str(), literal.value());
            pos = close + 1;
        } else if is_prop_definition(source, body) {
            // A definition whose default is not a string; nothing inside it
            // is a prop.
            pos = close + 1;
        }
    }

    Ok(props)
}

fn scan_declarations(source: &str) -> ExtractResult<Vec<PropertyDescriptor>> {
    let head = compiled(&PROP_LOOSE_HEAD)?;
    let mut props = Vec::new();
    let mut pos = 0;

    while let Some(caps) = head.captures_at(source, pos) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        pos = whole.end();

        if caps.get(2).is_some() {
            let open = whole.end() - 1;
            let Some(close) = matching_brace(source, open) else {
                continue;
            };
            if !is_prop_definition(source, open + 1..close) {
                // A container such as `props: {`; its entries are the props.
                continue;
            }
            pos = close + 1;
        }

        let name = name.as_str();
        if props.iter().any(|p: &PropertyDescriptor| p.name == name) {
            continue;
        }
        let default = lookup_default(source, name)?.unwrap_or_default();
        props.push(PropertyDescriptor::string(name, default));
    }

    Ok(props)
}

fn is_prop_definition(source: &str, body: Range<usize>) -> bool {
    if source[body.clone()].trim().is_empty() {
        return true;
    }
    // `type: { ... }` is a prop named `type`, not the type option.
    object_entries(source, body)
        .iter()
        .any(|entry| {
            PROP_OPTION_KEYS.contains(&entry.key) && !source[entry.value.clone()].starts_with('{')
        })
}

fn push_unique(props: &mut Vec<PropertyDescriptor>, name: &str, default: String) {
    if !props.iter().any(|p| p.name == name) {
        props.push(PropertyDescriptor::string(name, default));
    }
}

/// The quoted literal of the top-level `default` key in an object body.
fn quoted_default(source: &str, body: Range<usize>) -> Option<QuotedLiteral<'_>> {
    object_entries(source, body)
        .into_iter()
        .find(|entry| entry.key == "default")
        .and_then(|entry| Scanner::at(source, entry.value.start).read_quoted_string())
}

/// Object bodies of every `name: { ... }` definition, in source order.
fn definitions(source: &str, name: &str) -> ExtractResult<Vec<Range<usize>>> {
    let pattern = format!(
        r"(?:^|[^{IDENT_CONTINUE}.]){}\s*:\s*\{{",
        regex::escape(name)
    );
    let re = Regex::new(&pattern).map_err(|e| ExtractError::invalid_pattern(&e))?;

    let mut bodies = Vec::new();
    let mut pos = 0;
    while let Some(m) = re.find_at(source, pos) {
        let open = m.end() - 1;
        if let Some(close) = matching_brace(source, open) {
            bodies.push(open + 1..close);
        }
        pos = open + 1;
    }
    Ok(bodies)
}

/// Find the first quoted default declared for `name`.
fn lookup_default(source: &str, name: &str) -> ExtractResult<Option<String>> {
    Ok(definitions(source, name)?
        .into_iter()
        .find_map(|body| quoted_default(source, body))
        .map(|literal| literal.value()))
}

/// Replace the quoted default of every definition of `name`.
///
/// Returns `Ok(None)` when no definition of `name` has a quoted default.
/// The new value is written as a single-quoted literal; nothing else in the
/// source changes.
pub fn set_property_default(
    source: &str,
    name: &str,
    new_default: &str,
) -> ExtractResult<Option<String>> {
    if !is_identifier(name) {
        return Err(ExtractError::invalid_identifier(name));
    }

    let mut literals: Vec<Range<usize>> = definitions(source, name)?
        .into_iter()
        .filter_map(|body| quoted_default(source, body).map(|literal| literal.span))
        .collect();
    if literals.is_empty() {
        return Ok(None);
    }
    literals.sort_by_key(|span| span.start);

    let replacement = single_quoted(new_default);
    let mut output = String::with_capacity(source.len() + replacement.len());
    let mut occurrences = 0;
    let mut last = 0;
    for span in literals {
        // Inside a literal already replaced, e.g. a default whose text
        // looks like another definition of `name`.
        if span.start < last {
            continue;
        }
        output.push_str(&source[last..span.start]);
        output.push_str(&replacement);
        last = span.end;
        occurrences += 1;
    }
    output.push_str(&source[last..]);

    tracing::debug!(name, occurrences, "rewrote prop default");
    Ok(Some(output))
}

/// Replace the quoted default of every definition of `name`, returning the
/// source unchanged when there is nothing to rewrite.
pub fn rewrite_property_default(source: &str, name: &str, new_default: &str) -> String {
    match set_property_default(source, name, new_default) {
        Ok(Some(rewritten)) => rewritten,
        Ok(None) => source.to_string(),
        Err(err) => {
            tracing::warn!(%err, name, "prop default left unchanged");
            source.to_string()
        }
    }
}
