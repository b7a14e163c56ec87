use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    value: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    left: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right: Option<Box<Node>>,
}

impl Node {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn set_left(&mut self, left: Option<Node>) {
        self.left = left.map(Box::new);
    }

    pub fn set_right(&mut self, right: Option<Node>) {
        self.right = right.map(Box::new);
    }
}

/// Binary tree built balanced from a slice, normally a sorted one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[i32]) -> Self {
        let mut tree = Self::new();
        tree.set_tree(values);
        tree
    }

    /// 以中間元素為根遞迴建樹，取代原本的樹
    pub fn set_tree(&mut self, values: &[i32]) {
        self.root = build_subtree(values).map(Box::new);
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        fn count(node: Option<&Node>) -> usize {
            node.map_or(0, |n| 1 + count(n.left()) + count(n.right()))
        }
        count(self.root())
    }

    pub fn height(&self) -> usize {
        fn depth(node: Option<&Node>) -> usize {
            node.map_or(0, |n| 1 + depth(n.left()).max(depth(n.right())))
        }
        depth(self.root())
    }

    pub fn in_order(&self) -> Vec<i32> {
        fn walk(node: Option<&Node>, out: &mut Vec<i32>) {
            if let Some(n) = node {
                walk(n.left(), out);
                out.push(n.value());
                walk(n.right(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len());
        walk(self.root(), &mut out);
        out
    }
}

fn build_subtree(values: &[i32]) -> Option<Node> {
    if values.is_empty() {
        return None;
    }

    let mid = values.len() / 2;
    let mut root = Node::new(values[mid]);
    root.set_left(build_subtree(&values[..mid]));
    root.set_right(build_subtree(&values[mid + 1..]));
    Some(root)
}

fn write_subtree(f: &mut fmt::Formatter<'_>, node: Option<&Node>, depth: usize) -> fmt::Result {
    let Some(node) = node else {
        return Ok(());
    };
    writeln!(f, "{}- {}", " ".repeat(depth), node.value())?;
    write_subtree(f, node.left(), depth + 1)?;
    write_subtree(f, node.right(), depth + 1)
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtree(f, self.root(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_middle_element() {
        let tree = Tree::from_values(&[1, 2, 3, 4]);
        let root = tree.root().unwrap();
        assert_eq!(root.value(), 3);
        assert_eq!(root.left().unwrap().value(), 2);
        assert_eq!(root.right().unwrap().value(), 4);
        assert_eq!(root.left().unwrap().left().unwrap().value(), 1);
    }

    #[test]
    fn test_in_order_reproduces_sorted_input() {
        let values: Vec<i32> = (1..=15).collect();
        let tree = Tree::from_values(&values);
        assert_eq!(tree.in_order(), values);
        assert_eq!(tree.len(), 15);
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn test_display_pre_order_with_indent() {
        let tree = Tree::from_values(&[1, 2, 3]);
        assert_eq!(tree.to_string(), "- 2\n - 1\n - 3\n");

        let tree = Tree::from_values(&[1, 2, 3, 4, 5]);
        assert_eq!(tree.to_string(), "- 3\n - 2\n  - 1\n - 5\n  - 4\n");
    }

    #[test]
    fn test_empty_input_clears_tree() {
        let mut tree = Tree::from_values(&[1, 2]);
        assert!(!tree.is_empty());
        tree.set_tree(&[]);
        assert!(tree.root().is_none());
        assert_eq!(tree.to_string(), "");
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_node_setters() {
        let mut node = Node::new(5);
        node.set_left(Some(Node::new(1)));
        node.set_right(Some(Node::new(9)));
        assert_eq!(node.left().map(Node::value), Some(1));
        assert_eq!(node.right().map(Node::value), Some(9));
        node.set_left(None);
        assert!(node.left().is_none());
    }
}
