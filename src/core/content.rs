//! # Content Factory
//!
//! The builder never decides what a pane shows. It asks a `ContentFactory`
//! for one view per leaf, passing the pane's sequence number and the
//! configured `ContentKind`, and stores whatever comes back.

/// What kind of view fills each leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    /// Single-line static display.
    Label,
    /// Multi-line wrapped text filling the pane.
    #[default]
    TextArea,
}

impl ContentKind {
    pub fn toggled(self) -> Self {
        match self {
            ContentKind::Label => ContentKind::TextArea,
            ContentKind::TextArea => ContentKind::Label,
        }
    }
}

/// Produces the view placed into a leaf.
pub trait ContentFactory {
    /// The view type stored in the tree.
    type View;

    /// Create the view for pane `number` (1-based, creation order).
    fn create(&mut self, number: usize, kind: ContentKind) -> Self::View;
}

/// How many times the pane number is repeated in its filler text.
pub const FILLER_REPEAT: usize = 1000;

/// The stock pane view: the pane number repeated as filler text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneContent {
    pub number: usize,
    pub kind: ContentKind,
    pub text: String,
}

/// Factory for `PaneContent`.
#[derive(Debug, Default)]
pub struct PaneFactory;

impl ContentFactory for PaneFactory {
    type View = PaneContent;

    fn create(&mut self, number: usize, kind: ContentKind) -> PaneContent {
        PaneContent {
            number,
            kind,
            text: number.to_string().repeat(FILLER_REPEAT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_factory_fills_with_number() {
        let pane = PaneFactory.create(12, ContentKind::Label);
        assert_eq!(pane.number, 12);
        assert_eq!(pane.kind, ContentKind::Label);
        assert_eq!(pane.text.len(), 2 * FILLER_REPEAT);
        assert!(pane.text.starts_with("1212"));
    }

    #[test]
    fn test_content_kind_toggles() {
        assert_eq!(ContentKind::Label.toggled(), ContentKind::TextArea);
        assert_eq!(ContentKind::TextArea.toggled(), ContentKind::Label);
    }
}
