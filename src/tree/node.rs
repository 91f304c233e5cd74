use std::collections::BTreeMap;

use crate::metric::Distance;

/// A single tree node: one item plus its children keyed by exact distance to that item.
///
/// A node has at most one child per distance value.
pub struct Node<T> {
    pub(crate) item: T,
    pub(crate) children: BTreeMap<Distance, Node<T>>,
}

impl<T> Node<T> {
    /// Creates a leaf node.
    #[inline]
    pub fn new(item: T) -> Self {
        Self {
            item,
            children: BTreeMap::new(),
        }
    }

    /// Returns the item held by this node.
    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Returns the child at `distance`, if any.
    #[inline]
    pub fn child(&self, distance: Distance) -> Option<&Node<T>> {
        self.children.get(&distance)
    }

    /// Iterates children as `(edge value, child)` in ascending edge order.
    pub fn children(&self) -> impl Iterator<Item = (Distance, &Node<T>)> {
        self.children.iter().map(|(&d, child)| (d, child))
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// Copies bottom-up with an explicit stack; a derived clone recurses once per level.
impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        enum Step<'a, T> {
            Enter(&'a Node<T>),
            Exit(&'a Node<T>),
        }

        let mut steps = vec![Step::Enter(self)];
        let mut built: Vec<Node<T>> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(node) => {
                    steps.push(Step::Exit(node));
                    steps.extend(node.children.values().map(Step::Enter));
                }
                Step::Exit(node) => {
                    // Children were entered in ascending edge order, so their copies
                    // finished in descending order and sit on top of `built`.
                    let copies = built.split_off(built.len() - node.children.len());
                    let mut copy = Node::new(node.item.clone());
                    copy.children = node.children.keys().rev().copied().zip(copies).collect();
                    built.push(copy);
                }
            }
        }

        built.pop().unwrap_or_else(|| Node::new(self.item.clone()))
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("item", &self.item)
            .field("children", &self.children.len())
            .finish()
    }
}

// Deep, chain-shaped trees would otherwise recurse once per level on drop.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Node<T>> = Vec::new();
        stack.extend(std::mem::take(&mut self.children).into_values());

        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
