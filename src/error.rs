// Error handling for pathtmpl

use std::fmt;

/// Template parse error
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateError {
    Empty,
    EmptyPlaceholder { position: usize },
    DuplicatePlaceholder(String),
    ReservedPlaceholder(String),
    PlaceholderLabel(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Empty => write!(f, "Template has no segments"),
            TemplateError::EmptyPlaceholder { position } => {
                write!(f, "Empty placeholder name in segment {}", position)
            }
            TemplateError::DuplicatePlaceholder(name) => {
                write!(f, "Duplicate placeholder '{}'", name)
            }
            TemplateError::ReservedPlaceholder(name) => {
                write!(f, "Placeholder name '{}' is reserved", name)
            }
            TemplateError::PlaceholderLabel(name) => write!(
                f,
                "First segment must be a literal label, found placeholder '{}'",
                name
            ),
        }
    }
}

impl std::error::Error for TemplateError {}

/// Failure to recover parameters from a concrete path
#[derive(Debug, Clone, PartialEq)]
pub enum MatchError {
    EmptyTemplate,
    InvalidTemplate(TemplateError),
    TooFewSegments { required: usize, actual: usize },
    AnchorNotFound { anchor: String, from: usize },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::EmptyTemplate => write!(f, "Cannot match against an empty template"),
            MatchError::InvalidTemplate(err) => write!(f, "Invalid template: {}", err),
            MatchError::TooFewSegments { required, actual } => write!(
                f,
                "Path has {} segments but the template requires at least {}",
                actual, required
            ),
            MatchError::AnchorNotFound { anchor, from } => write!(
                f,
                "Segment '{}' not found at or after segment {}",
                anchor, from
            ),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::InvalidTemplate(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TemplateError> for MatchError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::Empty => MatchError::EmptyTemplate,
            other => MatchError::InvalidTemplate(other),
        }
    }
}

// Extension trait for attaching the offending template to parse failures
pub trait TemplateResultExt<T> {
    /// Convert template errors to anyhow errors naming the template text
    fn template_err(self, template: &str) -> anyhow::Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> TemplateResultExt<T> for Result<T, E> {
    fn template_err(self, template: &str) -> anyhow::Result<T> {
        self.map_err(|e| anyhow::Error::new(e).context(format!("Template '{}'", template)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_template_maps_to_match_error() {
        assert_eq!(MatchError::from(TemplateError::Empty), MatchError::EmptyTemplate);
    }

    #[test]
    fn test_invalid_template_keeps_source() {
        let err = MatchError::from(TemplateError::DuplicatePlaceholder("name".to_string()));
        assert_eq!(err.to_string(), "Invalid template: Duplicate placeholder 'name'");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_template_err_adds_context() {
        let result: Result<(), TemplateError> = Err(TemplateError::Empty);
        let err = result.template_err("/").unwrap_err();
        assert_eq!(err.to_string(), "Template '/'");
        assert_eq!(err.root_cause().to_string(), "Template has no segments");
    }
}
