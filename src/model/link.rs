// External links attached to a test case

use serde::Serialize;

/// Kind of an external link understood by the report viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Issue,
    Tms,
    Custom,
}

/// Link to an external resource (issue tracker, TMS, anything else).
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}
