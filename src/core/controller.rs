//! # Reconfiguration Controller
//!
//! Owns the current `LayoutOptions` and turns every configuration change
//! into a full rebuild of the tree held by a `Host`.
//!
//! ```text
//!   Idle ──ConfigChange──▶ Rebuilding ──▶ Idle
//!                           │
//!                           ├─ host.detach()   (old tree dropped here)
//!                           ├─ builder::build()
//!                           ├─ host.attach()
//!                           └─ host.request_layout()   or defer until shown
//! ```
//!
//! There is no diffing: no leaf content or pane position survives a
//! change. Rebuilds are synchronous, so `Rebuilding` is never observed
//! between calls.

use log::{debug, warn};

use crate::core::builder::{self, LayoutOptions};
use crate::core::content::ContentFactory;
use crate::core::tree::SplitTree;

/// The container that displays the tree.
pub trait Host<V> {
    /// Take ownership of a new tree, or clear the area with `None`.
    fn attach(&mut self, tree: Option<SplitTree<V>>);

    /// Give up the current tree, if any.
    fn detach(&mut self) -> Option<SplitTree<V>>;

    /// Recompute layout for the attached tree.
    fn request_layout(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Rebuilding,
}

/// A configuration-changing input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigChange {
    /// New contents of the pane count text field.
    PaneCountText(String),
    ToggleOrientation,
    ToggleBorder,
    ToggleTitles,
    ToggleContentKind,
    /// Swap in a whole snapshot at once.
    Replace(LayoutOptions),
}

/// What happened to layout after a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEffect {
    /// The host was asked to lay out the new tree.
    Requested,
    /// The host has not been shown yet; layout waits for `mark_shown`.
    Deferred,
}

/// Parse pane count text the way the input field does.
///
/// Surrounding whitespace and a leading sign are accepted. Anything that is
/// not an integer, and any negative value, counts as zero panes.
pub fn parse_pane_count(text: &str) -> usize {
    match text.trim().parse::<i64>() {
        Ok(count) if count >= 0 => usize::try_from(count).unwrap_or(usize::MAX),
        _ => 0,
    }
}

pub struct Controller<F: ContentFactory> {
    options: LayoutOptions,
    pane_text: String,
    max_panes: Option<usize>,
    factory: F,
    state: ControllerState,
    shown: bool,
    layout_pending: bool,
}

impl<F: ContentFactory> Controller<F> {
    pub fn new(options: LayoutOptions, factory: F) -> Self {
        Self {
            pane_text: options.pane_count.to_string(),
            options,
            max_panes: None,
            factory,
            state: ControllerState::Idle,
            shown: false,
            layout_pending: false,
        }
    }

    /// Cap the pane count accepted from input.
    pub fn with_max_panes(mut self, max_panes: Option<usize>) -> Self {
        self.max_panes = max_panes;
        self.options.pane_count = self.clamp(self.options.pane_count);
        self
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Raw text of the pane count field, as last entered.
    pub fn pane_text(&self) -> &str {
        &self.pane_text
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Apply a change and rebuild.
    pub fn apply<H: Host<F::View>>(&mut self, change: ConfigChange, host: &mut H) -> LayoutEffect {
        debug!("Applying config change: {:?}", change);
        match change {
            ConfigChange::PaneCountText(text) => {
                self.options.pane_count = self.clamp(parse_pane_count(&text));
                self.pane_text = text;
            }
            ConfigChange::ToggleOrientation => {
                self.options.orientation = self.options.orientation.flipped();
            }
            ConfigChange::ToggleBorder => self.options.border = !self.options.border,
            ConfigChange::ToggleTitles => self.options.titles = self.options.titles.toggled(),
            ConfigChange::ToggleContentKind => {
                self.options.content_kind = self.options.content_kind.toggled();
            }
            ConfigChange::Replace(options) => {
                self.pane_text = options.pane_count.to_string();
                self.options = options;
                self.options.pane_count = self.clamp(self.options.pane_count);
            }
        }
        self.rebuild(host)
    }

    /// Discard whatever the host shows and build from the current options.
    pub fn rebuild<H: Host<F::View>>(&mut self, host: &mut H) -> LayoutEffect {
        self.state = ControllerState::Rebuilding;

        if let Some(previous) = host.detach() {
            debug!(
                "Discarding tree with {} panes",
                previous.visible_leaf_count()
            );
            drop(previous);
        }

        let tree = builder::build(&self.options, &mut self.factory);
        if tree.is_none() {
            debug!("No panes requested, leaving host empty");
        }
        host.attach(tree);

        let effect = if self.shown {
            host.request_layout();
            LayoutEffect::Requested
        } else {
            self.layout_pending = true;
            LayoutEffect::Deferred
        };

        self.state = ControllerState::Idle;
        effect
    }

    /// Record that the host is on screen, flushing any deferred layout.
    pub fn mark_shown<H: Host<F::View>>(&mut self, host: &mut H) {
        self.shown = true;
        if std::mem::take(&mut self.layout_pending) {
            host.request_layout();
        }
    }

    fn clamp(&self, count: usize) -> usize {
        match self.max_panes {
            Some(max) if count > max => {
                warn!("Pane count {} exceeds limit {}, clamping", count, max);
                max
            }
            _ => count,
        }
    }
}
