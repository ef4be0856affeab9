use serde::Deserialize;
use serde_json::Value;

/// Styling kind of a rich-text node, taken from its `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Bold,
    Color,
    Unknown,
}

impl NodeKind {
    pub fn key(&self) -> &'static str {
        match self {
            NodeKind::Text => "text",
            NodeKind::Bold => "bold",
            NodeKind::Color => "color",
            NodeKind::Unknown => "unknown",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "text" => NodeKind::Text,
            "bold" => NodeKind::Bold,
            "color" => NodeKind::Color,
            _ => NodeKind::Unknown,
        }
    }
}

/// What a node carries in its `content` field.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Empty,
    Text(String),
    Nested(Box<Node>),
}

/// One element of a DataLens rich-text tree.
///
/// Built leniently from JSON: anything that is not an object becomes an
/// unknown leaf, and content that is neither a string nor an object is
/// treated as absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Node {
    pub kind: NodeKind,
    pub content: Content,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, content: Content) -> Self {
        Self {
            kind,
            content,
            children: Vec::new(),
        }
    }

    pub fn text(content: &str) -> Self {
        Self::new(NodeKind::Text, Content::Text(content.to_string()))
    }

    pub fn bold(content: &str) -> Self {
        Self::new(NodeKind::Bold, Content::Text(content.to_string()))
    }

    pub fn color(content: &str) -> Self {
        Self::new(NodeKind::Color, Content::Text(content.to_string()))
    }

    /// A node of `kind` whose content is a nested text node.
    pub fn wrapping(kind: NodeKind, inner: Node) -> Self {
        Self::new(kind, Content::Nested(Box::new(inner)))
    }

    pub fn container(children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Unknown,
            content: Content::Empty,
            children,
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// The raw string content, if the node holds one directly.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&Value> for Node {
    fn from(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Node::container(Vec::new());
        };

        let kind = obj
            .get("type")
            .and_then(Value::as_str)
            .map(NodeKind::from_key)
            .unwrap_or(NodeKind::Unknown);

        let content = match obj.get("content") {
            Some(Value::String(s)) => Content::Text(s.clone()),
            Some(nested @ Value::Object(_)) => Content::Nested(Box::new(Node::from(nested))),
            _ => Content::Empty,
        };

        let children = obj
            .get("children")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Node::from).collect())
            .unwrap_or_default();

        Node {
            kind,
            content,
            children,
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_nested_tree_from_json() {
        let node: Node = serde_json::from_value(json!({
            "type": "bold",
            "content": {"type": "text", "content": "Pepe"},
            "children": [{"type": "color", "content": "▲ 1%"}]
        }))
        .unwrap();

        assert_eq!(node.kind, NodeKind::Bold);
        assert_eq!(
            node.content,
            Content::Nested(Box::new(Node::text("Pepe")))
        );
        assert_eq!(node.children, vec![Node::color("▲ 1%")]);
    }

    #[test]
    fn tolerates_odd_shapes() {
        let node = Node::from(json!({"content": 42, "children": "nope"}));
        assert_eq!(node.kind, NodeKind::Unknown);
        assert_eq!(node.content, Content::Empty);
        assert!(node.children.is_empty());

        let leaf = Node::from(json!("just a string"));
        assert_eq!(leaf, Node::container(Vec::new()));

        let unknown = Node::from(json!({"type": "link", "content": "x"}));
        assert_eq!(unknown.kind, NodeKind::Unknown);
        assert_eq!(unknown.text_content(), Some("x"));
    }
}
