use crate::models::{Content, Node, NodeKind};

/// Collect the text of every node whose kind is in `wanted`, depth first.
///
/// Only text, bold and color nodes ever contribute. Bold and color nodes
/// may wrap their string in a nested text node, which is unwrapped one level.
pub fn extract_nodes(node: &Node, wanted: &[NodeKind]) -> Vec<String> {
    let mut out = Vec::new();
    collect(node, wanted, &mut out);
    out
}

/// First fragment of `kind` in traversal order.
pub fn first_of_kind(node: &Node, kind: NodeKind) -> Option<String> {
    extract_nodes(node, &[kind]).into_iter().next()
}

fn collect(node: &Node, wanted: &[NodeKind], out: &mut Vec<String>) {
    if wanted.contains(&node.kind) {
        if let Some(fragment) = fragment_of(node) {
            out.push(fragment);
        }
    }

    for child in &node.children {
        collect(child, wanted, out);
    }
}

fn fragment_of(node: &Node) -> Option<String> {
    match node.kind {
        NodeKind::Text => match &node.content {
            Content::Text(s) => Some(s.clone()),
            Content::Nested(_) | Content::Empty => None,
        },
        NodeKind::Bold | NodeKind::Color => match &node.content {
            Content::Text(s) => Some(s.clone()),
            Content::Nested(inner) if inner.kind == NodeKind::Text => {
                Some(inner.text_content().unwrap_or_default().to_string())
            }
            Content::Nested(_) | Content::Empty => None,
        },
        NodeKind::Unknown => None,
    }
}
