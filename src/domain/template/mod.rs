// Template module for resource path templates
//
// This module provides parsing of `/kind/anchor/{name}` style templates,
// rendering them under a mount prefix, and recovering placeholder values
// from already rendered paths.

mod ast;
mod matcher;
mod parser;
mod resolver;
mod source;

pub use ast::{last_field, Segment, Template, Token, PREFIX_KEY, SEPARATOR};
pub use matcher::{match_path, path_parameters, PathParams};
pub use parser::TemplateParser;
pub use resolver::{missing_fields, render};
pub use source::{FnSource, ValueSource};
