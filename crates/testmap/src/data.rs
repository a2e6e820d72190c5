//! Input types for the report generator's literal arrays.
//!
//! The map report embeds two arrays (nodes and links) plus an ordered list
//! of per-test paths. The shapes below mirror that format field for field;
//! the generator owns the format and it is not renegotiated at runtime.

use serde::Deserialize;

use crate::error::{Error, Result};

fn default_tag() -> String {
    "link".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkData {
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default = "default_tag")]
    pub tag: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChildrenData {
    pub nodes: Vec<String>,
    pub links: Vec<LinkData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: ChildrenData,
    #[serde(default)]
    pub collapsed: bool,
}

/// The full node/link universe as emitted by the report generator. The
/// `links` array holds the root-level links; deeper links live in each
/// node's `children.links` and surface through expansion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MapData {
    pub nodes: Vec<NodeData>,
    pub links: Vec<LinkData>,
}

impl MapData {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| Error::InvalidData {
            message: err.to_string(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathLink {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathSpec {
    pub nodes: Vec<String>,
    pub links: Vec<PathLink>,
}

/// One user-selectable highlight target: a test name plus the node/link ids
/// its execution touched. Path ids need not all be currently visible.
#[derive(Debug, Clone, Deserialize)]
pub struct TestPath {
    pub test: String,
    #[serde(default)]
    pub path: PathSpec,
}

pub fn paths_from_json(text: &str) -> Result<Vec<TestPath>> {
    serde_json::from_str(text).map_err(|err| Error::InvalidData {
        message: err.to_string(),
    })
}
