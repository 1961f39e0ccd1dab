//! The four AVL rotations over owned subtrees.
//!
//! Every rotation takes the subtree root by value and returns the new local
//! root, which the caller stores back into the parent's link. When the child
//! a rotation pivots on is missing, the input root comes back untouched (same
//! allocation, same links).
//!
//! Hooks run once per elementary rotation, before any link changes:
//!
//! ```text
//!   a                b          single_left: hook(a, b)
//!    \              / \
//!     b     →      a   c
//!    / \            \
//!  bl   c            bl
//!
//!       c            b          single_right: hook(b, c)
//!      /            / \
//!     b     →      a   c
//!    / \              /
//!   a   br          br
//! ```
//!
//! While a hook runs, the parent's link to the child is vacated (the child is
//! passed as the other argument). Every other link still has its
//! pre-rotation value.

use std::convert::Infallible;

use tracing::trace;

use crate::error::HookError;
use crate::node::Node;

/// Optional observer for one elementary rotation.
pub type OnRotate<'a, T> = &'a mut dyn FnMut(&mut Node<T>, &mut Node<T>);

/// Observer that may veto a rotation by failing.
pub type TryOnRotate<'a, T, E> = &'a mut dyn FnMut(&mut Node<T>, &mut Node<T>) -> Result<(), E>;

type Rotated<T, E> = Result<Box<Node<T>>, HookError<T, E>>;

// ── elementary steps ──────────────────────────────────────────────────────

pub(crate) fn rotate_left<T, E>(
    mut a: Box<Node<T>>,
    hook: impl FnOnce(&mut Node<T>, &mut Node<T>) -> Result<(), E>,
) -> Rotated<T, E> {
    let Some(mut b) = a.right.take() else {
        trace!(rotation = "left", "no right child, skipping");
        return Ok(a);
    };
    if let Err(source) = hook(&mut *a, &mut *b) {
        a.right = Some(b);
        return Err(HookError::new(a, source));
    }
    a.right = b.left.take();
    b.left = Some(a);
    trace!(rotation = "left", "rotated");
    Ok(b)
}

pub(crate) fn rotate_right<T, E>(
    mut c: Box<Node<T>>,
    hook: impl FnOnce(&mut Node<T>, &mut Node<T>) -> Result<(), E>,
) -> Rotated<T, E> {
    let Some(mut b) = c.left.take() else {
        trace!(rotation = "right", "no left child, skipping");
        return Ok(c);
    };
    if let Err(source) = hook(&mut *b, &mut *c) {
        c.left = Some(b);
        return Err(HookError::new(c, source));
    }
    c.left = b.right.take();
    b.right = Some(c);
    trace!(rotation = "right", "rotated");
    Ok(b)
}

pub(crate) fn rotate_double_left<T, E>(
    mut a: Box<Node<T>>,
    on_left: impl FnOnce(&mut Node<T>, &mut Node<T>) -> Result<(), E>,
    on_right: impl FnOnce(&mut Node<T>, &mut Node<T>) -> Result<(), E>,
) -> Rotated<T, E> {
    let Some(right) = a.right.take() else {
        trace!(rotation = "double_left", "no right child, skipping");
        return Ok(a);
    };
    match rotate_right(right, on_right) {
        Ok(right) => a.right = Some(right),
        Err(err) => {
            let (right, source) = err.into_parts();
            a.right = Some(right);
            return Err(HookError::new(a, source));
        }
    }
    rotate_left(a, on_left)
}

pub(crate) fn rotate_double_right<T, E>(
    mut c: Box<Node<T>>,
    on_left: impl FnOnce(&mut Node<T>, &mut Node<T>) -> Result<(), E>,
    on_right: impl FnOnce(&mut Node<T>, &mut Node<T>) -> Result<(), E>,
) -> Rotated<T, E> {
    let Some(left) = c.left.take() else {
        trace!(rotation = "double_right", "no left child, skipping");
        return Ok(c);
    };
    match rotate_left(left, on_left) {
        Ok(left) => c.left = Some(left),
        Err(err) => {
            let (left, source) = err.into_parts();
            c.left = Some(left);
            return Err(HookError::new(c, source));
        }
    }
    rotate_right(c, on_right)
}

pub(crate) fn infallible<T>(rotated: Rotated<T, Infallible>) -> Box<Node<T>> {
    match rotated {
        Ok(root) => root,
        Err(err) => match err.source {},
    }
}

// ── public surface ────────────────────────────────────────────────────────

/// Rotates `a` left, promoting its right child.
///
/// `on_rotate` is called as `(a, b)` where `b` is the right child. Returns `b`,
/// or `a` itself when there is no right child.
pub fn single_left<T>(a: Box<Node<T>>, on_rotate: Option<OnRotate<'_, T>>) -> Box<Node<T>> {
    infallible(rotate_left(a, |parent, child| {
        if let Some(hook) = on_rotate {
            hook(parent, child);
        }
        Ok(())
    }))
}

/// Rotates `c` right, promoting its left child.
///
/// `on_rotate` is called as `(b, c)` where `b` is the left child. In both
/// single rotations the pair is passed in key order. Returns `b`, or `c`
/// itself when there is no left child.
pub fn single_right<T>(c: Box<Node<T>>, on_rotate: Option<OnRotate<'_, T>>) -> Box<Node<T>> {
    infallible(rotate_right(c, |child, parent| {
        if let Some(hook) = on_rotate {
            hook(child, parent);
        }
        Ok(())
    }))
}

/// Right-left double rotation: [`single_right`] on `a.right`, then
/// [`single_left`] on `a`.
///
/// Left steps report to `on_left`, right steps to `on_right`. Each step
/// skips itself independently if its pivot child is missing.
pub fn double_left<T>(
    a: Box<Node<T>>,
    on_left: Option<OnRotate<'_, T>>,
    on_right: Option<OnRotate<'_, T>>,
) -> Box<Node<T>> {
    infallible(rotate_double_left(
        a,
        |parent, child| {
            if let Some(hook) = on_left {
                hook(parent, child);
            }
            Ok(())
        },
        |child, parent| {
            if let Some(hook) = on_right {
                hook(child, parent);
            }
            Ok(())
        },
    ))
}

/// Left-right double rotation: [`single_left`] on `c.left`, then
/// [`single_right`] on `c`.
pub fn double_right<T>(
    c: Box<Node<T>>,
    on_left: Option<OnRotate<'_, T>>,
    on_right: Option<OnRotate<'_, T>>,
) -> Box<Node<T>> {
    infallible(rotate_double_right(
        c,
        |parent, child| {
            if let Some(hook) = on_left {
                hook(parent, child);
            }
            Ok(())
        },
        |child, parent| {
            if let Some(hook) = on_right {
                hook(child, parent);
            }
            Ok(())
        },
    ))
}

/// [`single_left`] with a hook that can fail.
///
/// On failure nothing has been relinked and the error carries `a` back.
pub fn try_single_left<T, E>(
    a: Box<Node<T>>,
    on_rotate: Option<TryOnRotate<'_, T, E>>,
) -> Result<Box<Node<T>>, HookError<T, E>> {
    rotate_left(a, |parent, child| match on_rotate {
        Some(hook) => hook(parent, child),
        None => Ok(()),
    })
}

/// [`single_right`] with a hook that can fail.
pub fn try_single_right<T, E>(
    c: Box<Node<T>>,
    on_rotate: Option<TryOnRotate<'_, T, E>>,
) -> Result<Box<Node<T>>, HookError<T, E>> {
    rotate_right(c, |child, parent| match on_rotate {
        Some(hook) => hook(child, parent),
        None => Ok(()),
    })
}

/// [`double_left`] with hooks that can fail.
///
/// If `on_left` fails, the inner right rotation has already happened and the
/// returned root reflects it.
pub fn try_double_left<T, E>(
    a: Box<Node<T>>,
    on_left: Option<TryOnRotate<'_, T, E>>,
    on_right: Option<TryOnRotate<'_, T, E>>,
) -> Result<Box<Node<T>>, HookError<T, E>> {
    rotate_double_left(
        a,
        |parent, child| match on_left {
            Some(hook) => hook(parent, child),
            None => Ok(()),
        },
        |child, parent| match on_right {
            Some(hook) => hook(child, parent),
            None => Ok(()),
        },
    )
}

/// [`double_right`] with hooks that can fail.
///
/// If `on_right` fails, the inner left rotation has already happened.
pub fn try_double_right<T, E>(
    c: Box<Node<T>>,
    on_left: Option<TryOnRotate<'_, T, E>>,
    on_right: Option<TryOnRotate<'_, T, E>>,
) -> Result<Box<Node<T>>, HookError<T, E>> {
    rotate_double_right(
        c,
        |parent, child| match on_left {
            Some(hook) => hook(parent, child),
            None => Ok(()),
        },
        |child, parent| match on_right {
            Some(hook) => hook(child, parent),
            None => Ok(()),
        },
    )
}
