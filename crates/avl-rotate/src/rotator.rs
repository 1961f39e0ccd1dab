//! Rotations with their hooks bound once.
//!
//! A self-balancing tree typically has one way of fixing its balance
//! metadata after a left rotation and one after a right rotation. [`Rotator`]
//! stores both and exposes the four rotations taking only the subtree root.

use std::marker::PhantomData;

use crate::node::Node;
use crate::rotate::{
    infallible, rotate_double_left, rotate_double_right, rotate_left, rotate_right,
};

/// The four rotations with `on_left` / `on_right` pre-applied.
///
/// Left-oriented elementary rotations call `on_left(parent, child)`,
/// right-oriented ones call `on_right(child, parent)`, exactly as the free
/// functions in [`crate::rotate`] do when given `Some` hooks.
pub struct Rotator<T, L, R> {
    on_left: L,
    on_right: R,
    _node: PhantomData<fn(Box<Node<T>>) -> Box<Node<T>>>,
}

impl<T, L, R> Rotator<T, L, R>
where
    L: FnMut(&mut Node<T>, &mut Node<T>),
    R: FnMut(&mut Node<T>, &mut Node<T>),
{
    pub fn new(on_left: L, on_right: R) -> Self {
        Self {
            on_left,
            on_right,
            _node: PhantomData,
        }
    }

    pub fn single_left(&mut self, a: Box<Node<T>>) -> Box<Node<T>> {
        let on_left = &mut self.on_left;
        infallible(rotate_left(a, |parent, child| {
            on_left(parent, child);
            Ok(())
        }))
    }

    pub fn single_right(&mut self, c: Box<Node<T>>) -> Box<Node<T>> {
        let on_right = &mut self.on_right;
        infallible(rotate_right(c, |child, parent| {
            on_right(child, parent);
            Ok(())
        }))
    }

    pub fn double_left(&mut self, a: Box<Node<T>>) -> Box<Node<T>> {
        let Self {
            on_left, on_right, ..
        } = self;
        infallible(rotate_double_left(
            a,
            |parent, child| {
                on_left(parent, child);
                Ok(())
            },
            |child, parent| {
                on_right(child, parent);
                Ok(())
            },
        ))
    }

    pub fn double_right(&mut self, c: Box<Node<T>>) -> Box<Node<T>> {
        let Self {
            on_left, on_right, ..
        } = self;
        infallible(rotate_double_right(
            c,
            |parent, child| {
                on_left(parent, child);
                Ok(())
            },
            |child, parent| {
                on_right(child, parent);
                Ok(())
            },
        ))
    }

    /// Gives the hooks back, along with anything they captured.
    pub fn into_hooks(self) -> (L, R) {
        (self.on_left, self.on_right)
    }
}

/// Binds `on_left` and `on_right` for repeated use.
pub fn make_rotator<T, L, R>(on_left: L, on_right: R) -> Rotator<T, L, R>
where
    L: FnMut(&mut Node<T>, &mut Node<T>),
    R: FnMut(&mut Node<T>, &mut Node<T>),
{
    Rotator::new(on_left, on_right)
}
