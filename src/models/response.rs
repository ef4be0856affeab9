use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Node;

/// Decoded body of a `charts/api/run` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse {
    pub data: TableData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub head: Vec<Header>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

/// A table cell. The value is usually a rich-text tree, but the image
/// column carries a plain mapping with a `src` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub value: Value,
}

impl Cell {
    pub fn node(&self) -> Node {
        Node::from(&self.value)
    }

    pub fn src(&self) -> Option<&str> {
        self.value.get("src").and_then(Value::as_str)
    }
}
