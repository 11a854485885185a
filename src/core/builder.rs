//! # Tree Builder
//!
//! Maps a layout snapshot to a concrete `SplitTree`. Pure apart from the
//! calls into the `ContentFactory`: the same options always give the same
//! shape.
//!
//! ## Expansion order
//!
//! For more than two panes the root is grown recursively, left side first:
//!
//! ```text
//! expand(node):
//!     stop once the pane target is met
//!     split slot 0 if it is a leaf
//!     split slot 1 if it is a leaf (and the target is still unmet)
//!     if both slots are now nodes: expand(slot 0), then expand(slot 1)
//! ```
//!
//! The trees this produces are about half as deep as their pane count, so
//! the walk runs on an explicit stack rather than the call stack.
//!
//! Each split moves the old leaf (and its title) into the new node's first
//! slot and puts the next numbered pane in the second. So with five panes:
//!
//! ```text
//! V ┬ H ┬ V ┬ "View 1"
//!   │   │   └ "View 5"
//!   │   └ "View 3"
//!   └ H ┬ "View 2"
//!       └ "View 4"
//! ```

use log::{debug, warn};

use crate::core::content::{ContentFactory, ContentKind};
use crate::core::tree::{NodeId, Orientation, SlotIndex, SplitTree};

/// Whether slots carry numbered titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitlePolicy {
    /// "View 1", "View 2", ... in creation order.
    Numbered,
    /// Every title is the empty string.
    #[default]
    Hidden,
}

impl TitlePolicy {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            TitlePolicy::Numbered
        } else {
            TitlePolicy::Hidden
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, TitlePolicy::Numbered)
    }

    pub fn toggled(self) -> Self {
        Self::from_enabled(!self.is_enabled())
    }

    /// Title for pane `number`.
    pub fn title(self, number: usize) -> String {
        match self {
            TitlePolicy::Numbered => format!("View {number}"),
            TitlePolicy::Hidden => String::new(),
        }
    }
}

/// Configuration snapshot the builder works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    pub pane_count: usize,
    /// Orientation of the root; nested levels alternate from here.
    pub orientation: Orientation,
    pub border: bool,
    pub titles: TitlePolicy,
    pub content_kind: ContentKind,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            pane_count: 2,
            orientation: Orientation::Vertical,
            border: false,
            titles: TitlePolicy::Hidden,
            content_kind: ContentKind::TextArea,
        }
    }
}

/// Build the tree for `options`, or `None` when no panes are requested.
pub fn build<F: ContentFactory>(
    options: &LayoutOptions,
    factory: &mut F,
) -> Option<SplitTree<F::View>> {
    let target = options.pane_count;
    if target == 0 {
        return None;
    }

    let kind = options.content_kind;
    let mut tree = SplitTree::new(
        options.orientation,
        factory.create(1, kind),
        factory.create(2, kind),
    );
    let root = tree.root_mut();
    root.set_border(options.border);
    root.set_title(SlotIndex::First, options.titles.title(1));
    root.set_title(SlotIndex::Second, options.titles.title(2));

    if target == 1 {
        root.set_slot_visible(SlotIndex::Second, false);
    }

    if target > 2 {
        let mut expansion = Expansion {
            tree: &mut tree,
            factory,
            kind,
            titles: options.titles,
            created: 2,
            target,
        };
        expansion.expand(NodeId::ROOT);
    }

    debug!(
        "Built tree: {} panes, {} splits, depth {}",
        tree.visible_leaf_count(),
        tree.split_count(),
        tree.depth()
    );
    Some(tree)
}

/// Running state of one expansion pass.
struct Expansion<'a, F: ContentFactory> {
    tree: &'a mut SplitTree<F::View>,
    factory: &'a mut F,
    kind: ContentKind,
    titles: TitlePolicy,
    created: usize,
    target: usize,
}

impl<F: ContentFactory> Expansion<'_, F> {
    fn done(&self) -> bool {
        self.created >= self.target
    }

    /// Pre-order walk from `root`: a node's slot 0 subtree is finished
    /// before its slot 1 subtree is started.
    fn expand(&mut self, root: NodeId) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if self.done() {
                return;
            }

            for index in SlotIndex::BOTH {
                if self.is_leaf(id, index) {
                    self.split(id, index);
                }
            }

            let children = self.tree.node(id).map(|node| {
                [
                    node.slot(SlotIndex::First).child(),
                    node.slot(SlotIndex::Second).child(),
                ]
            });
            if let Some([Some(first), Some(second)]) = children {
                stack.push(second);
                stack.push(first);
            }
        }
    }

    fn is_leaf(&self, id: NodeId, index: SlotIndex) -> bool {
        self.tree
            .node(id)
            .is_some_and(|node| node.slot(index).is_leaf())
    }

    fn split(&mut self, id: NodeId, index: SlotIndex) {
        if self.done() {
            return;
        }

        self.created += 1;
        let number = self.created;
        let fresh = self.factory.create(number, self.kind);

        // The migrated title already sits in slot 0; only the new pane needs one.
        match self.tree.convert_slot_to_split(id, index, fresh) {
            Ok(child) => {
                if let Some(node) = self.tree.node_mut(child) {
                    node.set_title(SlotIndex::Second, self.titles.title(number));
                }
            }
            Err(e) => {
                warn!("Split of pane {number} failed: {e}");
            }
        }
    }
}
