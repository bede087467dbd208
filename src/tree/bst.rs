//! Unbalanced binary search tree keyed by paper count
//!
//! Smaller keys go left, equal or larger keys go right. There is no
//! rebalancing, so height follows insertion order and reaches `len` for
//! sorted input. Every operation walks the tree iteratively.

use super::{OrderedIndex, TreeEntry};
use crate::graph::AuthorKey;
use std::collections::VecDeque;
use std::fmt;

type Link = Option<Box<Node>>;

struct Node {
    entry: TreeEntry,
    left: Link,
    right: Link,
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Productivity tree over a caller-supplied entry list
#[derive(Default)]
pub struct ProductivityTree {
    root: Link,
    len: usize,
}

impl ProductivityTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree by inserting entries in the given order
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = TreeEntry>,
    {
        let mut tree = Self::new();
        for entry in entries {
            tree.insert(entry);
        }
        tree
    }

    /// Sides taken from the root to the first node (pre-order) holding `identity`
    fn route_to(&self, identity: &AuthorKey) -> Option<Vec<Side>> {
        let mut route = Vec::new();
        let mut stack: Vec<(&Node, usize, Option<Side>)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0, None));
        }

        while let Some((node, depth, side)) = stack.pop() {
            route.truncate(depth.saturating_sub(1));
            if let Some(side) = side {
                route.push(side);
            }
            if &node.entry.identity == identity {
                return Some(route);
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1, Some(Side::Right)));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1, Some(Side::Left)));
            }
        }

        None
    }
}

/// Detach the leftmost node of a subtree and return its entry
fn take_min(mut slot: &mut Link) -> Option<TreeEntry> {
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        match slot {
            Some(node) => slot = &mut node.left,
            None => return None,
        }
    }

    let node = slot.take()?;
    let Node { entry, right, .. } = *node;
    *slot = right;
    Some(entry)
}

impl OrderedIndex for ProductivityTree {
    fn insert(&mut self, entry: TreeEntry) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if entry.key < node.entry.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node {
            entry,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    fn delete(&mut self, identity: &AuthorKey) -> Option<TreeEntry> {
        let route = self.route_to(identity)?;

        let mut slot = &mut self.root;
        for side in route {
            slot = match slot {
                Some(node) => match side {
                    Side::Left => &mut node.left,
                    Side::Right => &mut node.right,
                },
                None => return None,
            };
        }

        let two_children = slot
            .as_ref()
            .is_some_and(|node| node.left.is_some() && node.right.is_some());

        let removed = if two_children {
            // Replace with the in-order successor's entry
            let node = slot.as_mut()?;
            let successor = take_min(&mut node.right)?;
            std::mem::replace(&mut node.entry, successor)
        } else {
            let node = slot.take()?;
            let Node { entry, left, right } = *node;
            *slot = left.or(right);
            entry
        };

        self.len -= 1;
        Some(removed)
    }

    fn in_order(&self) -> Vec<&TreeEntry> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node> = Vec::new();
        let mut current = self.root.as_deref();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else { break };
            out.push(&node.entry);
            current = node.right.as_deref();
        }

        out
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        let mut height = 0;
        let mut level: VecDeque<&Node> = self.root.as_deref().into_iter().collect();

        while !level.is_empty() {
            height += 1;
            for _ in 0..level.len() {
                if let Some(node) = level.pop_front() {
                    level.extend(node.left.as_deref());
                    level.extend(node.right.as_deref());
                }
            }
        }

        height
    }
}

impl fmt::Debug for ProductivityTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductivityTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .finish()
    }
}

impl Drop for ProductivityTree {
    // Unlink iteratively so degenerate (list-shaped) trees do not recurse
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
