// Template rendering: substitute placeholder values under a mount prefix

use tracing::debug;

use super::ast::{join_segments, Token, SEPARATOR};
use super::parser::TemplateParser;
use super::source::ValueSource;

/// Render `template` into a concrete path mounted at `prefix`.
///
/// The template's first segment (its category label) is replaced by the prefix.
/// Placeholders the source cannot resolve are left as literal `{name}` text.
pub fn render<S>(prefix: &str, template: &str, source: &S) -> String
where
    S: ValueSource + ?Sized,
{
    let mut parts: Vec<String> = Vec::new();

    let prefix = prefix.trim_matches(SEPARATOR);
    if !prefix.is_empty() {
        parts.push(prefix.to_string());
    }

    for raw in TemplateParser::tokenize(template).into_iter().skip(1) {
        match TemplateParser::parse_token(raw) {
            Token::Literal(text) => parts.push(text),
            Token::Placeholder(name) => match source.get_string(&name) {
                Some(value) => parts.push(value),
                None => {
                    // Partial rendering is allowed; the placeholder stays as text
                    debug!(template, field = %name, "no value for placeholder");
                    parts.push(raw.to_string());
                }
            },
        }
    }

    let rendered = format!("{}{}", SEPARATOR, join_segments(&parts));
    debug!(template, prefix, %rendered, "rendered template");
    rendered
}

/// List placeholders (after the label) the source has no value for
pub fn missing_fields<S>(template: &str, source: &S) -> Vec<String>
where
    S: ValueSource + ?Sized,
{
    TemplateParser::tokenize(template)
        .into_iter()
        .skip(1)
        .filter_map(|raw| match TemplateParser::parse_token(raw) {
            Token::Placeholder(name) if source.get_string(&name).is_none() => Some(name),
            _ => None,
        })
        .collect()
}
