//! The host element tree the accordion reads and writes through.

use std::fmt::Debug;
use std::hash::Hash;

use crate::selector::Selector;

/// Inline `max-height` style of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MaxHeight {
    /// No explicit cap; the element takes its natural height.
    #[default]
    None,
    /// Capped at the given height.
    Px(f32),
}

impl MaxHeight {
    pub fn px(self) -> Option<f32> {
        match self {
            MaxHeight::None => None,
            MaxHeight::Px(px) => Some(px),
        }
    }
}

pub trait Dom {
    /// Handle to an element. Cheap to copy and compare.
    type Node: Copy + Eq + Hash + Debug;

    /// The document root. Queries without a scope start here.
    fn root(&self) -> Self::Node;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Child elements in document order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Lower-case tag name.
    fn tag(&self, node: Self::Node) -> &str;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    /// Height of the element's content ignoring any `max-height` cap
    /// (the DOM's `scrollHeight`).
    fn natural_height(&self, node: Self::Node) -> f32;

    fn max_height(&self, node: Self::Node) -> MaxHeight;

    fn set_max_height(&mut self, node: Self::Node, value: MaxHeight);

    /// All descendants of `scope` (or of the root) matching `selector`, in
    /// document order. The scope itself is never included.
    fn query_all(&self, scope: Option<Self::Node>, selector: &Selector) -> Vec<Self::Node> {
        let mut found = Vec::new();
        let start = scope.unwrap_or_else(|| self.root());
        let mut stack: Vec<Self::Node> = self.children(start).into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            if selector.matches(self, node) {
                found.push(node);
            }
            stack.extend(self.children(node).into_iter().rev());
        }
        found
    }

    /// First descendant of `scope` matching `selector`.
    fn query(&self, scope: Option<Self::Node>, selector: &Selector) -> Option<Self::Node> {
        self.query_all(scope, selector).into_iter().next()
    }

    /// Nearest ancestor-or-self of `node` matching `selector`.
    fn closest(&self, node: Self::Node, selector: &Selector) -> Option<Self::Node> {
        let mut current = Some(node);
        while let Some(n) = current {
            if selector.matches(self, n) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    /// Returns true if `node` is `ancestor` or lies inside it.
    fn contains(&self, ancestor: Self::Node, node: Self::Node) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }
}
