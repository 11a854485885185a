use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::tui::component::Component;
use crate::tui::components::{PaneTree, StatusBar};
use crate::tui::{TuiState, WorkArea};

pub fn draw_ui(frame: &mut Frame, tui: &mut TuiState, work_area: &WorkArea) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [options_area, panes_area, status_area] = layout.areas(frame.area());

    tui.options_bar.render(frame, options_area);

    let tree = work_area.tree();
    PaneTree::new(tree, &tui.scheme).render(frame, panes_area);

    let mut status = StatusBar {
        panes: tree.map(|t| t.visible_leaf_count()),
        splits: tree.map_or(0, |t| t.split_count()),
        orientation: tree.map_or(tui.orientation, |t| t.root().orientation()),
        style: tui.scheme.normal.style(),
    };
    status.render(frame, status_area);
}
