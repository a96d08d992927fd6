// Path matching: recover placeholder values from an already rendered path

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::ast::{join_segments, Template, Token, PREFIX_KEY};
use super::parser::TemplateParser;
use crate::error::MatchError;

/// Values recovered from a concrete path.
///
/// Always holds the prefix capture (exposed under [`PREFIX_KEY`]) plus one
/// value per placeholder of the matched template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    prefix: String,
    values: BTreeMap<String, String>,
}

impl PathParams {
    /// Text captured before the first anchor (the mount path)
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        if key == PREFIX_KEY {
            Some(&self.prefix)
        } else {
            self.values.get(key).map(String::as_str)
        }
    }

    /// Number of entries, counting the prefix
    pub fn len(&self) -> usize {
        self.values.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Entries with the prefix first, then placeholders by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        std::iter::once((PREFIX_KEY, self.prefix.as_str()))
            .chain(self.values.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn into_map(self) -> HashMap<String, String> {
        let mut map: HashMap<String, String> = self.values.into_iter().collect();
        map.insert(PREFIX_KEY.to_string(), self.prefix);
        map
    }
}

impl From<PathParams> for HashMap<String, String> {
    fn from(params: PathParams) -> Self {
        params.into_map()
    }
}

impl Serialize for PathParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// What a template segment contributes while scanning a concrete path
enum Slot<'a> {
    Anchor(&'a str),
    Prefix,
    Named(&'a str),
}

/// Parse `template` and match `path` against it
pub fn path_parameters(template: &str, path: &str) -> Result<PathParams, MatchError> {
    let parsed = TemplateParser::parse(template)?;
    match_path(&parsed, path)
}

/// Match a concrete path against a parsed template.
///
/// Anchors are located left to right, each at its first occurrence that still
/// leaves room for the segments the rest of the template needs. An anchor that
/// ends the template must be the final path segment. Every capture spans at
/// least one segment; in a run of captures with no anchor between them, each
/// takes one segment and the last one takes the rest.
pub fn match_path(template: &Template, path: &str) -> Result<PathParams, MatchError> {
    if template.is_empty() {
        return Err(MatchError::EmptyTemplate);
    }

    let segments = TemplateParser::tokenize(path);
    let required = template.len();
    if segments.len() < required {
        debug!(path, required, actual = segments.len(), "path too short for template");
        return Err(MatchError::TooFewSegments {
            required,
            actual: segments.len(),
        });
    }

    let mut params = PathParams::default();
    let mut pending: Vec<Slot> = Vec::new();
    let mut cursor = 0;

    for (index, segment) in template.segments.iter().enumerate() {
        let slot = match (&segment.token, segment.anchoring) {
            (Token::Literal(text), true) => Slot::Anchor(text),
            (Token::Literal(_), false) => Slot::Prefix,
            (Token::Placeholder(name), _) => Slot::Named(name),
        };

        let anchor = match slot {
            Slot::Anchor(text) => text,
            capture => {
                pending.push(capture);
                continue;
            }
        };

        let remaining = required - index - 1;
        let lowest = cursor + pending.len();
        let highest = segments.len() - 1 - remaining;

        let found = if remaining == 0 {
            (lowest <= highest && segments[highest] == anchor).then_some(highest)
        } else {
            (lowest..=highest).find(|&i| segments[i] == anchor)
        };

        let at = found.ok_or_else(|| {
            debug!(path, anchor, from = lowest, "anchor not found");
            MatchError::AnchorNotFound {
                anchor: anchor.to_string(),
                from: lowest,
            }
        })?;

        assign(&mut params, pending.drain(..), &segments[cursor..at]);
        cursor = at + 1;
    }

    assign(&mut params, pending.drain(..), &segments[cursor..]);

    debug!(path, prefix = %params.prefix, captures = params.values.len(), "matched path");
    Ok(params)
}

// Each capture but the last takes one segment; the last takes what is left.
// Callers guarantee `segments` holds at least one segment per capture.
fn assign<'a>(
    params: &mut PathParams,
    captures: impl ExactSizeIterator<Item = Slot<'a>>,
    segments: &[&str],
) {
    let count = captures.len();
    if count == 0 {
        return;
    }
    debug_assert!(segments.len() >= count);

    for (i, slot) in captures.enumerate() {
        let value = if i + 1 == count {
            join_segments(&segments[i..])
        } else {
            segments[i].to_string()
        };

        match slot {
            Slot::Prefix => params.prefix = value,
            Slot::Named(name) => {
                params.values.insert(name.to_string(), value);
            }
            Slot::Anchor(_) => {}
        }
    }
}
