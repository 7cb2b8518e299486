//! Rich-text walker
//!
//! About pages render prose as paragraphs mixing plain text and links. The
//! content is flattened depth-first into [`RichNode`]s and then walked into
//! ordered [`Segment`]s.

use crate::comic::{Hyperlink, Segment};
use crate::extract::element_text;
use scraper::{ElementRef, Node};

/// One node of a flattened rich-text container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichNode {
    /// An `<a>` element
    Anchor { href: Option<String>, text: String },
    /// A text node, or any other element (carrying its full text)
    Text(String),
}

/// Flattens the descendants of each container, depth-first, in order
///
/// The containers themselves are not emitted. Comments and other
/// non-content nodes are skipped.
pub fn rich_text_nodes<'a>(containers: impl IntoIterator<Item = ElementRef<'a>>) -> Vec<RichNode> {
    let mut nodes = Vec::new();
    for container in containers {
        for node in container.descendants().skip(1) {
            match node.value() {
                Node::Text(text) => nodes.push(RichNode::Text(text.to_string())),
                Node::Element(element) => {
                    let Some(element_ref) = ElementRef::wrap(node) else {
                        continue;
                    };
                    let text = element_text(element_ref);
                    if element.name() == "a" {
                        nodes.push(RichNode::Anchor {
                            href: element.attr("href").map(str::to_string),
                            text,
                        });
                    } else {
                        nodes.push(RichNode::Text(text));
                    }
                }
                _ => {}
            }
        }
    }
    nodes
}

/// Walks flattened nodes into text and hyperlink segments
///
/// In the flattened sequence an anchor is always followed by its own text
/// node, which repeats the label. An anchor therefore consumes two nodes:
/// itself and that duplicate. Every other node consumes one.
///
/// # Example
///
/// ```
/// use gocomics::extract::{walk, RichNode};
/// use gocomics::{Hyperlink, Segment};
///
/// let nodes = vec![
///     RichNode::Anchor { href: Some("/a".into()), text: "A".into() },
///     RichNode::Text("A".into()),
///     RichNode::Text("B".into()),
/// ];
/// assert_eq!(
///     walk(&nodes),
///     vec![
///         Segment::Link(Hyperlink::new("/a", "A")),
///         Segment::Text("B".into()),
///     ]
/// );
/// ```
pub fn walk(nodes: &[RichNode]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(nodes.len());
    let mut index = 0;

    while index < nodes.len() {
        match &nodes[index] {
            RichNode::Anchor { href, text } => {
                match href {
                    Some(href) => segments.push(Segment::Link(Hyperlink::new(href, text))),
                    // A link without a target still contributes its label
                    None => segments.push(Segment::Text(text.clone())),
                }
                index += 2;
            }
            RichNode::Text(text) => {
                segments.push(Segment::Text(text.clone()));
                index += 1;
            }
        }
    }

    segments
}
