//! Owned binary-tree node.
//!
//! Each child is held in an `Option<Box<Node<T>>>`, so a node is owned by
//! exactly one parent and the tree can never contain a cycle. Rotations move
//! these boxes between slots; they never allocate or drop a node.

/// A binary-tree node carrying an opaque payload.
#[derive(Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub data: T,
    pub left: Option<Box<Node<T>>>,
    pub right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a node with no children.
    pub fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// Creates a boxed leaf, the form rotations operate on.
    pub fn leaf(data: T) -> Box<Self> {
        Box::new(Self::new(data))
    }

    pub fn with_children(
        data: T,
        left: Option<Box<Node<T>>>,
        right: Option<Box<Node<T>>>,
    ) -> Self {
        Self { data, left, right }
    }

    /// Builder: replaces the left child.
    pub fn with_left(mut self, left: Node<T>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Builder: replaces the right child.
    pub fn with_right(mut self, right: Node<T>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.as_deref_mut()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Clones a subtree node by node.
///
/// `None` maps to `None`. Every node of the result is freshly allocated, so
/// mutating the copy never reaches the source (and vice versa). Only the
/// payload needs `Clone`; the rotation functions place no bound on `T`.
pub fn deep_copy<T: Clone>(root: Option<&Node<T>>) -> Option<Box<Node<T>>> {
    let node = root?;
    Some(Box::new(Node {
        data: node.data.clone(),
        left: deep_copy(node.left()),
        right: deep_copy(node.right()),
    }))
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node {
            data: self.data.clone(),
            left: deep_copy(self.left()),
            right: deep_copy(self.right()),
        }
    }
}
