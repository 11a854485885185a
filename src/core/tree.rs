//! # Split Tree
//!
//! The structural unit of the pane layout: a `SplitNode` with exactly two
//! ordered slots. Each slot is either a leaf (`ContentSlot`) or another
//! `SplitNode`, so wider fan-out only ever comes from nesting.
//!
//! ```text
//! SplitNode(Vertical)                      nodes[0]
//! ├── [0] ""        SplitNode(Horizontal)  nodes[1]
//! │                 ├── [0] "View 1"  Leaf
//! │                 └── [1] "View 3"  Leaf
//! └── [1] "View 2"  Leaf
//! ```
//!
//! Nodes live in a flat arena owned by `SplitTree`; a slot refers to a nested
//! node by `NodeId`. Nodes are only ever appended, so ids stay valid for the
//! life of the tree. Dropping the tree drops every node and every piece of
//! leaf content at once; nothing is shared between trees.
//!
//! The builder grows trees down their left edge, so depth is about half the
//! pane count. Every walk here uses an explicit stack instead of recursion.
//!
//! This module knows nothing about rendering. The TUI adapter walks the tree
//! and decides how a node looks on screen.

use std::fmt;

/// Arrangement of a node's two children.
///
/// - `Vertical`: the divider runs top to bottom, children sit left/right
/// - `Horizontal`: the divider runs left to right, children are stacked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    /// The orientation given to a node created inside a slot of `self`.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
        }
    }
}

/// Position of a slot within its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotIndex {
    First,
    Second,
}

impl SlotIndex {
    /// Both indices in tree order.
    pub const BOTH: [SlotIndex; 2] = [SlotIndex::First, SlotIndex::Second];

    pub fn as_usize(self) -> usize {
        match self {
            SlotIndex::First => 0,
            SlotIndex::Second => 1,
        }
    }
}

/// Handle to a node inside a `SplitTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Debug, PartialEq, Eq)]
pub enum TreeError {
    /// The slot already holds a nested node and cannot be split again.
    AlreadySplit(NodeId, SlotIndex),
    /// The id does not belong to this tree.
    UnknownNode(NodeId),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::AlreadySplit(node, index) => write!(
                f,
                "slot {} of node {} already holds a split node",
                index.as_usize(),
                node.0
            ),
            TreeError::UnknownNode(node) => write!(f, "unknown node {}", node.0),
        }
    }
}

impl std::error::Error for TreeError {}

/// Leaf payload: an opaque content view plus a visibility flag.
#[derive(Debug)]
pub struct ContentSlot<V> {
    pub content: V,
    pub visible: bool,
}

impl<V> ContentSlot<V> {
    pub fn new(content: V) -> Self {
        Self {
            content,
            visible: true,
        }
    }
}

/// What occupies a slot. Exactly one of the two, never both.
#[derive(Debug)]
pub enum SlotContent<V> {
    Leaf(ContentSlot<V>),
    Split(NodeId),
}

/// One of the two positions in a `SplitNode`.
#[derive(Debug)]
pub struct Slot<V> {
    pub title: String,
    pub content: SlotContent<V>,
}

impl<V> Slot<V> {
    fn new_leaf(content: V) -> Self {
        Self {
            title: String::new(),
            content: SlotContent::Leaf(ContentSlot::new(content)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, SlotContent::Leaf(_))
    }

    pub fn is_split(&self) -> bool {
        matches!(self.content, SlotContent::Split(_))
    }

    /// Nested nodes are always shown; only leaves can be hidden.
    pub fn is_visible(&self) -> bool {
        match &self.content {
            SlotContent::Leaf(leaf) => leaf.visible,
            SlotContent::Split(_) => true,
        }
    }

    pub fn leaf(&self) -> Option<&ContentSlot<V>> {
        match &self.content {
            SlotContent::Leaf(leaf) => Some(leaf),
            SlotContent::Split(_) => None,
        }
    }

    pub fn child(&self) -> Option<NodeId> {
        match self.content {
            SlotContent::Split(id) => Some(id),
            SlotContent::Leaf(_) => None,
        }
    }
}

/// Internal tree element with exactly two slots.
#[derive(Debug)]
pub struct SplitNode<V> {
    orientation: Orientation,
    border: bool,
    slots: [Slot<V>; 2],
}

impl<V> SplitNode<V> {
    fn new(orientation: Orientation, first: Slot<V>, second: Slot<V>) -> Self {
        Self {
            orientation,
            border: false,
            slots: [first, second],
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn border(&self) -> bool {
        self.border
    }

    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    pub fn slot(&self, index: SlotIndex) -> &Slot<V> {
        &self.slots[index.as_usize()]
    }

    pub fn slot_mut(&mut self, index: SlotIndex) -> &mut Slot<V> {
        &mut self.slots[index.as_usize()]
    }

    pub fn slots(&self) -> &[Slot<V>; 2] {
        &self.slots
    }

    pub fn title(&self, index: SlotIndex) -> &str {
        &self.slot(index).title
    }

    pub fn titles(&self) -> [&str; 2] {
        [&self.slots[0].title, &self.slots[1].title]
    }

    pub fn set_title(&mut self, index: SlotIndex, title: impl Into<String>) {
        self.slot_mut(index).title = title.into();
    }

    /// Hide or show a leaf slot. Returns false for a slot holding a split,
    /// which has no visibility of its own.
    pub fn set_slot_visible(&mut self, index: SlotIndex, visible: bool) -> bool {
        match &mut self.slot_mut(index).content {
            SlotContent::Leaf(leaf) => {
                leaf.visible = visible;
                true
            }
            SlotContent::Split(_) => false,
        }
    }
}

/// A whole split tree: the root node plus every node nested below it.
#[derive(Debug)]
pub struct SplitTree<V> {
    nodes: Vec<SplitNode<V>>,
}

impl<V> SplitTree<V> {
    /// Create a tree whose root is a two-slot split with a leaf in each slot
    /// and no titles.
    pub fn new(orientation: Orientation, first: V, second: V) -> Self {
        Self {
            nodes: vec![SplitNode::new(
                orientation,
                Slot::new_leaf(first),
                Slot::new_leaf(second),
            )],
        }
    }

    pub fn root(&self) -> &SplitNode<V> {
        &self.nodes[0]
    }

    pub fn root_mut(&mut self) -> &mut SplitNode<V> {
        &mut self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> Option<&SplitNode<V>> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SplitNode<V>> {
        self.nodes.get_mut(id.0)
    }

    /// Number of split nodes, the root included.
    pub fn split_count(&self) -> usize {
        self.nodes.len()
    }

    /// Replace the leaf in `index` of node `id` with a new split node.
    ///
    /// The previous leaf and its title move into the new node's first slot;
    /// `fresh` becomes the second slot with an empty title. The new node
    /// takes the flipped orientation and the parent's border setting.
    pub fn convert_slot_to_split(
        &mut self,
        id: NodeId,
        index: SlotIndex,
        fresh: V,
    ) -> Result<NodeId, TreeError> {
        let new_id = NodeId(self.nodes.len());
        let parent = self.nodes.get_mut(id.0).ok_or(TreeError::UnknownNode(id))?;
        let orientation = parent.orientation.flipped();
        let border = parent.border;

        let slot = parent.slot_mut(index);
        if slot.is_split() {
            return Err(TreeError::AlreadySplit(id, index));
        }
        let title = std::mem::take(&mut slot.title);
        let previous = std::mem::replace(&mut slot.content, SlotContent::Split(new_id));

        let mut node = SplitNode::new(
            orientation,
            Slot {
                title,
                content: previous,
            },
            Slot::new_leaf(fresh),
        );
        node.border = border;
        self.nodes.push(node);
        Ok(new_id)
    }

    /// Number of leaves, hidden ones included.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .flat_map(|node| node.slots.iter())
            .filter(|slot| slot.is_leaf())
            .count()
    }

    pub fn visible_leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .flat_map(|node| node.slots.iter())
            .filter(|slot| slot.leaf().is_some_and(|leaf| leaf.visible))
            .count()
    }

    /// Longest chain of split nodes from the root down, the root counting as one.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(NodeId::ROOT, 1)];
        while let Some((id, level)) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            deepest = deepest.max(level);
            stack.extend(node.slots.iter().filter_map(Slot::child).map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Leaves in tree order (slot 0 before slot 1, parent before child),
    /// each paired with the title of the slot holding it.
    pub fn leaves(&self) -> Vec<(&str, &ContentSlot<V>)> {
        let mut out = Vec::new();
        let mut stack: Vec<&Slot<V>> = self.root().slots.iter().rev().collect();
        while let Some(slot) = stack.pop() {
            match &slot.content {
                SlotContent::Leaf(leaf) => out.push((slot.title.as_str(), leaf)),
                SlotContent::Split(child) => {
                    if let Some(node) = self.node(*child) {
                        stack.extend(node.slots.iter().rev());
                    }
                }
            }
        }
        out
    }

    /// Content-free copy of the tree for structural comparison.
    pub fn shape(&self) -> Shape {
        let nodes = self
            .nodes
            .iter()
            .map(|node| {
                let slot_shape = |slot: &Slot<V>| SlotShape {
                    title: slot.title.clone(),
                    content: match &slot.content {
                        SlotContent::Leaf(leaf) => ShapeContent::Leaf {
                            visible: leaf.visible,
                        },
                        SlotContent::Split(child) => ShapeContent::Split(child.0),
                    },
                };
                NodeShape {
                    orientation: node.orientation,
                    border: node.border,
                    slots: [slot_shape(&node.slots[0]), slot_shape(&node.slots[1])],
                }
            })
            .collect();
        Shape { nodes }
    }
}

/// Structure of a tree with the leaf content stripped out.
///
/// Nodes keep their arena order (root first, then creation order), and a
/// split slot refers to its child by index into `nodes`. Two trees built
/// from the same configuration have equal shapes even though their content
/// values are distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub nodes: Vec<NodeShape>,
}

impl Shape {
    pub fn root(&self) -> &NodeShape {
        &self.nodes[0]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeShape {
    pub orientation: Orientation,
    pub border: bool,
    pub slots: [SlotShape; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotShape {
    pub title: String,
    pub content: ShapeContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeContent {
    Leaf { visible: bool },
    /// Index of the nested node in `Shape::nodes`.
    Split(usize),
}
