// Resource path templates: render `/kind/anchor/{name}` templates under a
// mount prefix, recover placeholder values from rendered paths, plus small
// set-like helpers over slices.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod util;

pub use domain::template::{
    last_field, match_path, path_parameters, render, PathParams, Template, TemplateParser,
    ValueSource, PREFIX_KEY,
};
pub use error::{MatchError, TemplateError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
