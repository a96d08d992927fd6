use serde::{Deserialize, Serialize};

/// One entry of the route table file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteSettings {
    pub alias: String,
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Mount prefix used when rendering without an explicit `--prefix`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount: Option<String>,
}
