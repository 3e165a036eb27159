//! Tree rendering
//!
//! Turns a scanned storage tree into indented display lines.

use crate::tree::node::Node;

/// Indent unit per nesting level.
const INDENT: &str = "    ";

/// Renders `nodes` as one line per entry, depth-first, each level
/// indented one unit past its parent. The returned iterator is finite
/// and consumed once.
pub fn render(nodes: Vec<Node>) -> TreeLines {
    TreeLines {
        stack: nodes.into_iter().rev().map(|node| (node, 0)).collect(),
    }
}

/// Lazy stream of indented tree lines.
pub struct TreeLines {
    stack: Vec<(Node, usize)>,
}

impl Iterator for TreeLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let (node, depth) = self.stack.pop()?;
        match node {
            Node::Leaf(name) => Some(format!("{}{}", INDENT.repeat(depth), name)),
            Node::Directory(name, children) => {
                for child in children.into_iter().rev() {
                    self.stack.push((child, depth + 1));
                }
                Some(format!("{}{}", INDENT.repeat(depth), name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_flat_entries() {
        let nodes = vec![
            Node::Leaf("a.txt".to_string()),
            Node::Leaf("b.txt".to_string()),
        ];
        let lines: Vec<String> = render(nodes).collect();
        assert_eq!(lines, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_render_nested_directories() {
        let nodes = vec![
            Node::Directory(
                "docs".to_string(),
                vec![
                    Node::Leaf("readme.md".to_string()),
                    Node::Directory(
                        "drafts".to_string(),
                        vec![Node::Leaf("v1.md".to_string())],
                    ),
                ],
            ),
            Node::Leaf("top.txt".to_string()),
        ];
        let lines: Vec<String> = render(nodes).collect();
        assert_eq!(
            lines,
            vec![
                "docs",
                "    readme.md",
                "    drafts",
                "        v1.md",
                "top.txt",
            ]
        );
    }

    #[test]
    fn test_render_empty_tree() {
        let lines: Vec<String> = render(Vec::new()).collect();
        assert!(lines.is_empty());
    }
}
