// Common test utilities shared across test files

use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

#[allow(dead_code)]
pub const ROUTES_YAML: &str = r#"
- alias: role
  template: /transform/role/{name}
  description: Transform role
  mount: transform
- alias: alphabet
  template: /transform/alphabet/{name}
- alias: export
  template: /transit/export/{type}/{name}/{version}
  mount: transit
"#;

/// Build a string map from key/value pairs
#[allow(dead_code)]
pub fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Write `contents` to a temporary file that lives as long as the handle
#[allow(dead_code)]
pub fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Run the CLI with `args` and return its stdout
#[allow(dead_code)]
pub fn run_cli(args: &[&str]) -> anyhow::Result<String> {
    let mut out = Vec::new();
    let argv = std::iter::once("pathtmpl").chain(args.iter().copied());
    pathtmpl::cli::run(argv, &mut out)?;
    Ok(String::from_utf8(out)?)
}
