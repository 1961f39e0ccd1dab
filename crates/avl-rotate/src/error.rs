use std::fmt;

use thiserror::Error;

use crate::node::Node;

/// A fallible rotation hook returned an error.
///
/// The subtree is handed back in `root` as it stood when the hook failed.
/// For a single rotation that is the untouched input. For a double rotation
/// the inner step may already have been applied; nothing is rolled back.
#[derive(Error)]
#[error("rotation hook failed")]
pub struct HookError<T, E> {
    pub root: Box<Node<T>>,
    #[source]
    pub source: E,
}

impl<T, E> HookError<T, E> {
    pub fn new(root: Box<Node<T>>, source: E) -> Self {
        Self { root, source }
    }

    pub fn into_parts(self) -> (Box<Node<T>>, E) {
        (self.root, self.source)
    }
}

// Payloads need not be `Debug`, so only the hook's error is shown.
impl<T, E: fmt::Debug> fmt::Debug for HookError<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookError")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
