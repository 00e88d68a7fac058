use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

/// A value augmented with an ordered list of children of the same shape.
///
/// The payload is flattened next to `children` when serialized, so a
/// `TreeItem<Document>` reads and writes plain JSON objects:
/// `{"name": "root", "children": [{"name": "leaf"}]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TreeItem<T> {
    #[serde(flatten)]
    pub item: T,
    #[serde(default)]
    pub children: Vec<TreeItem<T>>,
}

impl<T> TreeItem<T> {
    pub fn new(item: T) -> Self {
        Self {
            item,
            children: Vec::new(),
        }
    }

    pub fn with_children(item: T, children: Vec<TreeItem<T>>) -> Self {
        Self { item, children }
    }

    /// Append a child and return it for further nesting.
    pub fn push(&mut self, item: T) -> &mut TreeItem<T> {
        self.children.push(TreeItem::new(item));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes, this one included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Pre-order traversal, children left to right.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { stack: vec![self] }
    }

    pub fn iter_postorder(&self) -> PostOrderIter<'_, T> {
        PostOrderIter {
            stack: vec![(self, false)],
        }
    }

    /// Payloads of all nodes without children, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaves(&self) -> Vec<&T> {
        self.iter()
            .filter(|node| node.is_leaf())
            .map(|node| &node.item)
            .collect()
    }

    /// First node in pre-order whose payload matches.
    pub fn find<P>(&self, predicate: P) -> Option<&TreeItem<T>>
    where
        P: Fn(&T) -> bool,
    {
        self.iter().find(|node| predicate(&node.item))
    }

    /// Transform every payload, keeping the shape.
    pub fn map<U, F>(self, mut f: F) -> TreeItem<U>
    where
        F: FnMut(T) -> U,
    {
        self.map_with(&mut f)
    }

    fn map_with<U, F>(self, f: &mut F) -> TreeItem<U>
    where
        F: FnMut(T) -> U,
    {
        let item = f(self.item);
        let children = self
            .children
            .into_iter()
            .map(|child| child.map_with(f))
            .collect();
        TreeItem { item, children }
    }

    /// Render with a caller-provided label for each payload.
    pub fn to_termtree<F>(&self, label: &F) -> Tree<String>
    where
        F: Fn(&T) -> String,
    {
        let leaves: Vec<_> = self
            .children
            .iter()
            .map(|child| child.to_termtree(label))
            .collect();
        Tree::new(label(&self.item)).with_leaves(leaves)
    }
}

impl<T> Deref for TreeItem<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.item
    }
}

impl<T> DerefMut for TreeItem<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.item
    }
}

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: fmt::Display> TreeDisplay for TreeItem<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        self.to_termtree(&|item: &T| item.to_string())
    }
}

pub struct Iter<'a, T> {
    stack: Vec<&'a TreeItem<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a TreeItem<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in current.children.iter().rev() {
            self.stack.push(child);
        }
        Some(current)
    }
}

pub struct PostOrderIter<'a, T> {
    stack: Vec<(&'a TreeItem<T>, bool)>,
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = &'a TreeItem<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if visited {
                return Some(current);
            }
            self.stack.push((current, true));
            for child in current.children.iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

impl<'a, T> IntoIterator for &'a TreeItem<T> {
    type Item = &'a TreeItem<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeItem<&'static str> {
        let mut root = TreeItem::new("root");
        let a = root.push("a");
        a.push("a1");
        a.push("a2");
        root.push("b");
        root
    }

    #[test]
    fn given_nested_tree_when_iterating_then_visits_preorder() {
        let tree = sample();
        let order: Vec<_> = tree.iter().map(|n| n.item).collect();
        assert_eq!(order, vec!["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn given_nested_tree_when_iterating_postorder_then_children_first() {
        let tree = sample();
        let order: Vec<_> = tree.iter_postorder().map(|n| n.item).collect();
        assert_eq!(order, vec!["a1", "a2", "a", "b", "root"]);
    }

    #[test]
    fn given_nested_tree_when_measuring_then_depth_and_len_match() {
        let tree = sample();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.leaves(), vec![&"a1", &"a2", &"b"]);
    }
}
