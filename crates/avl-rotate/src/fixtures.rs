//! Fixed three-node trees: the four imbalanced shapes each rotation repairs,
//! and the balanced shape they all repair to.
//!
//! ```text
//! right_heavy   left_heavy   right_middle_heavy   left_middle_heavy   balanced
//!   a               c          a                      c                 b
//!    \             /            \                    /                 / \
//!     b           b              c                  a                 a   c
//!      \         /              /                    \
//!       c       a              b                      b
//! ```

use crate::node::Node;

/// Repaired by [`crate::single_left`].
pub fn right_heavy() -> Box<Node<&'static str>> {
    Box::new(Node::new("a").with_right(Node::new("b").with_right(Node::new("c"))))
}

/// Repaired by [`crate::single_right`].
pub fn left_heavy() -> Box<Node<&'static str>> {
    Box::new(Node::new("c").with_left(Node::new("b").with_left(Node::new("a"))))
}

/// Repaired by [`crate::double_left`].
pub fn right_middle_heavy() -> Box<Node<&'static str>> {
    Box::new(Node::new("a").with_right(Node::new("c").with_left(Node::new("b"))))
}

/// Repaired by [`crate::double_right`].
pub fn left_middle_heavy() -> Box<Node<&'static str>> {
    Box::new(Node::new("c").with_left(Node::new("a").with_right(Node::new("b"))))
}

pub fn balanced() -> Box<Node<&'static str>> {
    Box::new(
        Node::new("b")
            .with_left(Node::new("a"))
            .with_right(Node::new("c")),
    )
}
