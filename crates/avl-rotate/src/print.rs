//! Box-drawing dump of a subtree, in the layout of `tree-dump`'s
//! `printTree`.
//!
//! ```text
//! b
//! ├─ a
//! └─ c
//! ```

use std::fmt;

use crate::node::Node;

/// Renders one child given the indentation its own children should use.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Lays out `children` under the current line, skipping trailing `None`s.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let mut out = String::new();
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child) in children.iter().enumerate().take(last + 1) {
        let Some(child) = child else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let text = child(&child_tab);
        let branch = if text.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !text.is_empty() {
            out.push(' ');
            out.push_str(&text);
        }
    }

    out
}

/// Prints `node` and its descendants; missing children of an inner node show
/// as `∅`.
pub fn print<T: fmt::Display>(node: Option<&Node<T>>, tab: &str) -> String {
    let Some(node) = node else {
        return "∅".to_string();
    };
    if node.is_leaf() {
        return node.data.to_string();
    }
    let left: &PrintChild<'_> = &|tab: &str| print(node.left(), tab);
    let right: &PrintChild<'_> = &|tab: &str| print(node.right(), tab);
    format!("{}{}", node.data, print_tree(tab, &[Some(left), Some(right)]))
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print(Some(self), ""))
    }
}
