// Template parser: splits a template into labelled, anchored segments

use std::collections::HashSet;

use super::ast::{Segment, Template, Token, PREFIX_KEY, SEPARATOR};
use crate::error::TemplateError;

pub struct TemplateParser;

impl TemplateParser {
    /// Parse a template, validating placeholder names.
    ///
    /// The first segment becomes the non-anchoring category label; every later
    /// literal is an anchor.
    pub fn parse(template: &str) -> Result<Template, TemplateError> {
        let mut segments = Vec::new();
        let mut seen = HashSet::new();

        for (position, raw) in Self::tokenize(template).into_iter().enumerate() {
            let token = Self::parse_token(raw);

            if let Token::Placeholder(name) = &token {
                if name.is_empty() {
                    return Err(TemplateError::EmptyPlaceholder { position });
                }
                if position == 0 {
                    return Err(TemplateError::PlaceholderLabel(name.clone()));
                }
                if name == PREFIX_KEY {
                    return Err(TemplateError::ReservedPlaceholder(name.clone()));
                }
                if !seen.insert(name.clone()) {
                    return Err(TemplateError::DuplicatePlaceholder(name.clone()));
                }
            }

            segments.push(if position == 0 {
                Segment::label(token)
            } else {
                Segment::anchored(token)
            });
        }

        if segments.is_empty() {
            return Err(TemplateError::Empty);
        }

        Ok(Template::new(segments))
    }

    /// Split on the separator, discarding leading empty segments.
    ///
    /// Never fails; an empty or all-separator input yields no segments.
    pub fn tokenize(template: &str) -> Vec<&str> {
        let trimmed = template.trim_start_matches(SEPARATOR);
        if trimmed.is_empty() {
            return Vec::new();
        }
        trimmed.split(SEPARATOR).collect()
    }

    /// Classify one raw segment. `{name}` is a placeholder, anything else is literal.
    pub fn parse_token(raw: &str) -> Token {
        match raw.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
            Some(name) => Token::Placeholder(name.to_string()),
            None => Token::Literal(raw.to_string()),
        }
    }
}
