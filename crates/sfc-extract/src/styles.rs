//! Style block extraction and rewriting.

use crate::compiled;
use crate::error::ExtractResult;
use crate::types::StyleBlock;
use once_cell::sync::Lazy;
use regex::Regex;

/// `<style attrs>content</style>`, non-greedy. Attributes must follow
/// whitespace so `<style-guide>` is not a style block.
static STYLE_BLOCK: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"(?is)<style(\s[^>]*)?>(.*?)</style\s*>"));

static SCRIPT_CLOSE: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"(?i)</script\s*>"));

/// Extract every `<style>` block in source order.
pub fn parse_styles(source: &str) -> ExtractResult<Vec<StyleBlock>> {
    let re = compiled(&STYLE_BLOCK)?;

    let styles: Vec<StyleBlock> = re
        .captures_iter(source)
        .map(|caps| {
            let attrs = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let content = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            StyleBlock::new(content.trim(), has_scoped_attr(attrs))
        })
        .collect();

    tracing::debug!(count = styles.len(), "style extraction finished");
    Ok(styles)
}

fn has_scoped_attr(attrs: &str) -> bool {
    attrs
        .split(|c: char| c.is_whitespace() || c == '/')
        .any(|attr| attr == "scoped" || attr.starts_with("scoped="))
}

/// Render style blocks as source text, separated by blank lines.
pub fn render_styles(styles: &[StyleBlock]) -> String {
    styles
        .iter()
        .map(|style| {
            let open = if style.scoped { "<style scoped>" } else { "<style>" };
            format!("{}\n{}\n</style>", open, style.content)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Replace the component's style blocks with `new_styles`.
///
/// An empty `new_styles` leaves the source untouched. Otherwise the run of
/// blocks starting at the first `<style>` (later blocks separated from it by
/// whitespace only) is replaced. Without existing blocks the styles go right
/// after the first `</script>`, or at the end of the source.
pub fn rewrite_styles(source: &str, new_styles: &[StyleBlock]) -> String {
    if new_styles.is_empty() {
        return source.to_string();
    }

    unchanged_on_error(source, try_rewrite_styles(source, new_styles))
}

fn unchanged_on_error(source: &str, rewritten: ExtractResult<String>) -> String {
    rewritten.unwrap_or_else(|err| {
        tracing::warn!(%err, "styles left unchanged");
        source.to_string()
    })
}

fn try_rewrite_styles(source: &str, new_styles: &[StyleBlock]) -> ExtractResult<String> {
    let rendered = render_styles(new_styles);
    let mut blocks = compiled(&STYLE_BLOCK)?.find_iter(source);

    if let Some(first) = blocks.next() {
        let mut end = first.end();
        for block in blocks {
            if !source[end..block.start()].trim().is_empty() {
                break;
            }
            end = block.end();
        }
        return Ok(format!(
            "{}{}{}",
            &source[..first.start()],
            rendered,
            &source[end..]
        ));
    }

    if let Some(close) = compiled(&SCRIPT_CLOSE)?.find(source) {
        let at = close.end();
        return Ok(format!("{}\n\n{}{}", &source[..at], rendered, &source[at..]));
    }

    if source.is_empty() {
        Ok(rendered)
    } else {
        Ok(format!("{}\n\n{}", source, rendered))
    }
}
