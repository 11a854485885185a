//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `ConfigChange` values for the
//! controller.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms and only redraws after
//! an event or a layout request from the controller. The first successful
//! draw marks the work area as shown, which releases the layout request
//! deferred by the initial build.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::config::ResolvedConfig;
use crate::core::content::{PaneContent, PaneFactory};
use crate::core::controller::{Controller, Host};
use crate::core::theme::ColorScheme;
use crate::core::tree::{Orientation, SplitTree};
use crate::tui::component::EventHandler;
use crate::tui::components::OptionsBar;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// The host container for the pane tree.
///
/// Owns the attached tree exclusively. Layout itself happens at draw time,
/// so a layout request just flags that the next frame must be drawn.
#[derive(Default)]
pub struct WorkArea {
    tree: Option<SplitTree<PaneContent>>,
    layout_requested: bool,
}

impl WorkArea {
    pub fn tree(&self) -> Option<&SplitTree<PaneContent>> {
        self.tree.as_ref()
    }

    /// Returns whether a layout was requested since the last call.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_requested)
    }
}

impl Host<PaneContent> for WorkArea {
    fn attach(&mut self, tree: Option<SplitTree<PaneContent>>) {
        self.tree = tree;
    }

    fn detach(&mut self) -> Option<SplitTree<PaneContent>> {
        self.tree.take()
    }

    fn request_layout(&mut self) {
        self.layout_requested = true;
    }
}

/// TUI-specific presentation state (not part of core layout logic)
pub struct TuiState {
    pub options_bar: OptionsBar,
    pub scheme: ColorScheme,
    /// Root orientation, shown in the status bar even with no tree attached.
    pub orientation: Orientation,
}

impl TuiState {
    pub fn new(controller: &Controller<PaneFactory>, scheme: ColorScheme) -> Self {
        let mut options_bar = OptionsBar::new(controller.pane_text(), scheme);
        options_bar.sync(controller.options());
        Self {
            options_bar,
            scheme,
            orientation: controller.options().orientation,
        }
    }

    /// Sync component props with the controller's options.
    fn sync(&mut self, controller: &Controller<PaneFactory>) {
        self.options_bar.sync(controller.options());
        self.orientation = controller.options().orientation;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut controller =
        Controller::new(config.layout, PaneFactory).with_max_panes(Some(config.max_panes));
    let mut work_area = WorkArea::default();
    // Built before the first frame; layout waits until it is shown
    controller.rebuild(&mut work_area);

    let mut tui = TuiState::new(&controller, config.color_scheme);

    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &mut controller, &mut work_area, &mut tui),
        Err(e) => Err(e),
    };
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    controller: &mut Controller<PaneFactory>,
    work_area: &mut WorkArea,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            tui.sync(controller);
            terminal.draw(|f| ui::draw_ui(f, tui, work_area))?;
            needs_redraw = false;

            if !controller.is_shown() {
                controller.mark_shown(work_area);
            }
        }

        if work_area.take_layout_request() {
            needs_redraw = true;
            continue;
        }

        let first_event = poll_event_timeout(IDLE_POLL)?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut pending = Vec::from_iter(first_event);
        while let Some(event) = poll_event_immediate()? {
            pending.push(event);
        }

        for event in pending {
            match event {
                TuiEvent::ForceQuit | TuiEvent::Escape | TuiEvent::InputChar('q') => {
                    info!("Quit requested");
                    return Ok(());
                }
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                other => {
                    if let Some(change) = tui.options_bar.handle_event(&other) {
                        controller.apply(change, work_area);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::LayoutOptions;
    use crate::core::controller::ConfigChange;

    #[test]
    fn test_work_area_is_a_host() {
        let mut controller = Controller::new(LayoutOptions::default(), PaneFactory);
        let mut work_area = WorkArea::default();

        controller.rebuild(&mut work_area);
        assert_eq!(work_area.tree().unwrap().visible_leaf_count(), 2);
        // Not shown yet, so no layout request.
        assert!(!work_area.take_layout_request());

        controller.mark_shown(&mut work_area);
        assert!(work_area.take_layout_request());
        assert!(!work_area.take_layout_request());

        controller.apply(ConfigChange::PaneCountText("0".into()), &mut work_area);
        assert!(work_area.tree().is_none());
        assert!(work_area.take_layout_request());
    }

    #[test]
    fn test_options_bar_drives_controller() {
        let mut controller = Controller::new(LayoutOptions::default(), PaneFactory);
        let mut work_area = WorkArea::default();
        controller.rebuild(&mut work_area);
        let mut tui = TuiState::new(&controller, ColorScheme::base());

        for event in [TuiEvent::InputChar('7'), TuiEvent::InputChar('t')] {
            if let Some(change) = tui.options_bar.handle_event(&event) {
                controller.apply(change, &mut work_area);
            }
        }
        tui.sync(&controller);

        assert_eq!(controller.pane_text(), "27");
        assert_eq!(work_area.tree().unwrap().visible_leaf_count(), 27);
        assert!(tui.options_bar.titles);
    }
}
