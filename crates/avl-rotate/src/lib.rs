//! AVL rotation primitives over owned binary trees.
//!
//! Provides the four classical rotations (single-left, single-right,
//! double-left, double-right) for any tree built from [`Node`]. Nothing here
//! tracks heights or balance factors: a self-balancing tree hands in hooks
//! that fix its own metadata while the rotation relinks nodes.
//!
//! ```
//! use avl_rotate::{fixtures, single_left};
//!
//! let root = single_left(fixtures::right_heavy(), None);
//! assert_eq!(root, fixtures::balanced());
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`Node`], [`deep_copy`] |
//! | [`rotate`] | [`single_left`], [`single_right`], [`double_left`], [`double_right`] and `try_*` variants |
//! | [`rotator`] | [`Rotator`], [`make_rotator`] |
//! | [`error`] | [`HookError`] |
//! | [`print`] | box-drawing dump, `Display` for [`Node`] |
//! | [`fixtures`] | fixed sample trees |

pub mod error;
pub mod fixtures;
pub mod node;
pub mod print;
pub mod rotate;
pub mod rotator;

pub use error::HookError;
pub use node::{deep_copy, Node};
pub use print::print;
pub use rotate::{
    double_left, double_right, single_left, single_right, try_double_left, try_double_right,
    try_single_left, try_single_right, OnRotate, TryOnRotate,
};
pub use rotator::{make_rotator, Rotator};
