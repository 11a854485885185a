//! # PaneTree Component
//!
//! Draws an attached `SplitTree` by walking it from the root. Each node
//! divides its area in half along its orientation; a hidden slot gives its
//! half to its sibling.
//!
//! ```text
//! Vertical             Horizontal
//! ┌────────┬────────┐  ┌─────────────────┐
//! │ slot 0 │ slot 1 │  │ slot 0          │
//! │        │        │  ├─────────────────┤
//! └────────┴────────┘  │ slot 1          │
//!                      └─────────────────┘
//! ```
//!
//! Transient wrapper: created each frame with a borrowed tree.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::content::{ContentKind, PaneContent};
use crate::core::theme::ColorScheme;
use crate::core::tree::{NodeId, Orientation, Slot, SlotContent, SplitNode, SplitTree};
use crate::tui::component::Component;

const EMPTY_MESSAGE: &str = "No views";

pub struct PaneTree<'a> {
    pub tree: Option<&'a SplitTree<PaneContent>>,
    pub scheme: &'a ColorScheme,
}

impl<'a> PaneTree<'a> {
    pub fn new(tree: Option<&'a SplitTree<PaneContent>>, scheme: &'a ColorScheme) -> Self {
        Self { tree, scheme }
    }

    /// Walks the tree with an explicit stack; left-leaning trees get as deep
    /// as half their pane count.
    fn render_tree(&self, frame: &mut Frame, tree: &SplitTree<PaneContent>, area: Rect) {
        let mut stack = vec![(NodeId::ROOT, area)];
        while let Some((id, area)) = stack.pop() {
            let Some(node) = tree.node(id) else {
                continue;
            };
            let [first, second] = node.slots();
            let areas = slot_areas(
                node.orientation(),
                area,
                [first.is_visible(), second.is_visible()],
            );
            for (slot, slot_area) in node.slots().iter().zip(areas) {
                let Some(slot_area) = slot_area else {
                    continue;
                };
                let inner = self.render_slot(frame, node, slot, slot_area);
                if let SlotContent::Split(child) = slot.content {
                    // Nothing left to draw into
                    if !inner.is_empty() {
                        stack.push((child, inner));
                    }
                }
            }
        }
    }

    /// Draws the slot's frame and, for a leaf, its content. Returns the
    /// inner area, which a split slot hands to its child node.
    fn render_slot(
        &self,
        frame: &mut Frame,
        node: &SplitNode<PaneContent>,
        slot: &Slot<PaneContent>,
        area: Rect,
    ) -> Rect {
        let normal = self.scheme.normal.style();
        // Nested nodes draw their own leaves' borders
        let mut block = match slot.content {
            SlotContent::Leaf(_) if node.border() => Block::bordered(),
            _ => Block::new(),
        }
        .style(normal);
        if !slot.title.is_empty() {
            block = block.title(Span::styled(slot.title.clone(), self.scheme.hot_focus.style()));
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if let SlotContent::Leaf(leaf) = &slot.content {
            render_content(frame, inner, &leaf.content, normal);
        }
        inner
    }
}

impl Component for PaneTree<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.tree {
            Some(tree) => self.render_tree(frame, tree, area),
            None => {
                let empty = Paragraph::new(EMPTY_MESSAGE)
                    .alignment(Alignment::Center)
                    .style(self.scheme.disabled.style());
                frame.render_widget(empty, area);
            }
        }
    }
}

/// Areas for a node's two slots. Both visible: halves along the
/// orientation. One visible: it takes the whole area.
pub fn slot_areas(orientation: Orientation, area: Rect, visible: [bool; 2]) -> [Option<Rect>; 2] {
    match visible {
        [true, true] => {
            let halves = [Constraint::Ratio(1, 2); 2];
            let layout = match orientation {
                Orientation::Vertical => Layout::horizontal(halves),
                Orientation::Horizontal => Layout::vertical(halves),
            };
            let [first, second] = layout.areas(area);
            [Some(first), Some(second)]
        }
        [true, false] => [Some(area), None],
        [false, true] => [None, Some(area)],
        [false, false] => [None, None],
    }
}

fn render_content(frame: &mut Frame, area: Rect, content: &PaneContent, style: Style) {
    let paragraph = Paragraph::new(content.text.as_str()).style(style);
    match content.kind {
        ContentKind::Label => {
            let line = Rect {
                height: area.height.min(1),
                ..area
            };
            frame.render_widget(paragraph, line);
        }
        ContentKind::TextArea => {
            frame.render_widget(paragraph.wrap(Wrap { trim: false }), area);
        }
    }
}
