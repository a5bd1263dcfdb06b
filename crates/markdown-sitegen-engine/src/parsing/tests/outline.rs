use crate::html::{HtmlNode, LeafNode, ParentNode};

/// Renders a node tree as an indented outline, one node per line.
///
/// Parents print their tag, leaves print their tag (if any), attributes and
/// quoted value. Used as a readable snapshot format.
pub fn outline(root: &ParentNode) -> String {
    let mut lines = Vec::new();
    parent(root, 0, &mut lines);
    lines.join("\n")
}

fn parent(node: &ParentNode, depth: usize, out: &mut Vec<String>) {
    out.push(format!(
        "{}{}{}",
        "  ".repeat(depth),
        node.tag.as_deref().unwrap_or("(untagged)"),
        attrs(&node.attrs.to_html())
    ));
    for child in &node.children {
        match child {
            HtmlNode::Parent(p) => parent(p, depth + 1, out),
            HtmlNode::Leaf(l) => out.push(format!("{}{}", "  ".repeat(depth + 1), leaf(l))),
        }
    }
}

fn leaf(node: &LeafNode) -> String {
    let value = node.value.as_deref().unwrap_or_default();
    match &node.tag {
        None => format!("{value:?}"),
        Some(tag) if value.is_empty() => format!("{tag}{}", attrs(&node.attrs.to_html())),
        Some(tag) => format!("{tag}{} {value:?}", attrs(&node.attrs.to_html())),
    }
}

fn attrs(html: &str) -> String {
    if html.is_empty() {
        String::new()
    } else {
        format!(" {html}")
    }
}
