use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub meta: Option<ScenarioMeta>,
    #[serde(default)]
    pub defaults: Option<ScenarioDefaults>,
    pub links: Vec<LinkRecord>,
    #[serde(default)]
    pub demands: Vec<DemandRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDefaults {
    #[serde(default)]
    pub load_policy: Option<LoadPolicy>,
}

/// What to do with a malformed link or demand record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Log and skip the record; keep loading the rest.
    #[default]
    SkipInvalid,
    /// Abort on the first malformed record.
    Strict,
}

/// Node or link identifier; input files may use strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ident {
    Number(i64),
    Text(String),
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ident::Number(n) => write!(f, "{n}"),
            Ident::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Ident::Text(s.to_string())
    }
}

impl From<i64> for Ident {
    fn from(n: i64) -> Self {
        Ident::Number(n)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(rename = "StartNode")]
    pub start_node: Ident,
    #[serde(rename = "EndNode")]
    pub end_node: Ident,
    #[serde(rename = "LinkId")]
    pub link_id: Ident,
    #[serde(rename = "Capacity")]
    pub capacity: f64,
    #[serde(rename = "Weight")]
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandRecord {
    #[serde(rename = "Source")]
    pub source: Ident,
    #[serde(rename = "Destination")]
    pub destination: Ident,
    #[serde(rename = "Demand")]
    pub demand: f64,
}
