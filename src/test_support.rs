//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::content::{ContentFactory, ContentKind};
use crate::core::controller::Host;
use crate::core::tree::SplitTree;

/// Factory whose views are just the pane numbers, recording every call.
#[derive(Debug, Default)]
pub struct NumberFactory {
    pub created: Vec<usize>,
}

impl ContentFactory for NumberFactory {
    type View = usize;

    fn create(&mut self, number: usize, _kind: ContentKind) -> usize {
        self.created.push(number);
        number
    }
}

/// Host that keeps the attached tree and logs every call.
pub struct RecordingHost<V> {
    pub tree: Option<SplitTree<V>>,
    pub log: Vec<&'static str>,
    pub layout_requests: usize,
}

impl<V> Default for RecordingHost<V> {
    fn default() -> Self {
        Self {
            tree: None,
            log: Vec::new(),
            layout_requests: 0,
        }
    }
}

impl<V> Host<V> for RecordingHost<V> {
    fn attach(&mut self, tree: Option<SplitTree<V>>) {
        self.log.push("attach");
        self.tree = tree;
    }

    fn detach(&mut self) -> Option<SplitTree<V>> {
        self.log.push("detach");
        self.tree.take()
    }

    fn request_layout(&mut self) {
        self.layout_requests += 1;
    }
}
