// Token types for resource path templates

/// Path separator shared by templates and concrete paths
pub const SEPARATOR: char = '/';

/// Reserved parameter key holding the text captured before the first anchor.
///
/// Placeholders may not use this name, so the prefix capture and a named
/// capture can never collide in a [`PathParams`](super::PathParams).
pub const PREFIX_KEY: &str = "path";

/// Represents a parsed template as an ordered list of segments
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Get the names of all placeholders in this template, in order
    pub fn placeholders(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match &segment.token {
                Token::Placeholder(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Get the literal segments that must appear verbatim in a concrete path
    pub fn anchors(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|segment| segment.anchoring)
            .filter_map(|segment| match &segment.token {
                Token::Literal(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The category label: the first segment, which names the resource kind
    pub fn label(&self) -> Option<&Segment> {
        self.segments.first()
    }

    /// Final segment rendered back to template text, braces included
    pub fn last_field(&self) -> String {
        self.segments
            .last()
            .map(|segment| segment.token.to_string())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// A template segment: one token plus its matching policy
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub token: Token,
    /// Whether a literal token must be located verbatim in the concrete path.
    /// Always false for the category label.
    pub anchoring: bool,
}

impl Segment {
    pub fn label(token: Token) -> Self {
        Self {
            token,
            anchoring: false,
        }
    }

    pub fn anchored(token: Token) -> Self {
        let anchoring = matches!(token, Token::Literal(_));
        Self { token, anchoring }
    }
}

/// A segment is either fixed text or a named capture
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Literal(String),
    Placeholder(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Literal(text) => write!(f, "{}", text),
            Token::Placeholder(name) => write!(f, "{{{}}}", name),
        }
    }
}

/// Return the final separator-delimited segment of a path or template.
///
/// Placeholder braces are kept. A trailing separator yields an empty string.
pub fn last_field(path: &str) -> &str {
    path.rsplit_once(SEPARATOR)
        .map_or(path, |(_, last)| last)
}

/// Join segments back into a path with the separator between them
pub(crate) fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let mut joined = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            joined.push(SEPARATOR);
        }
        joined.push_str(segment.as_ref());
    }
    joined
}
