use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One named route template as written in a YAML route file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteSettings {
    pub name: String,
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Values used for variables the caller does not provide
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub defaults: Map<String, Value>,
}
