//! # StatusBar Component
//!
//! Bottom line summarising the current tree, with the quit hint pushed to
//! the right edge:
//!
//! ```text
//! Split View Nesting | 5 panes, 4 splits (Vertical)                  q Quit
//! ```
//!
//! Stateless: everything it shows is a prop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::core::tree::Orientation;
use crate::tui::component::Component;

const APP_TITLE: &str = "Split View Nesting";
const QUIT_HINT: &str = "q Quit";

pub struct StatusBar {
    /// Visible panes in the attached tree; `None` when nothing is attached.
    pub panes: Option<usize>,
    pub splits: usize,
    pub orientation: Orientation,
    pub style: ratatui::style::Style,
}

impl StatusBar {
    pub fn text(&self, width: u16) -> String {
        let summary = match self.panes {
            Some(panes) => format!(
                "{APP_TITLE} | {} {}, {} {} ({})",
                panes,
                if panes == 1 { "pane" } else { "panes" },
                self.splits,
                if self.splits == 1 { "split" } else { "splits" },
                self.orientation.label()
            ),
            None => format!("{APP_TITLE} | no panes"),
        };

        let used = summary.width() + QUIT_HINT.width();
        let padding = usize::from(width).saturating_sub(used).max(1);
        format!("{summary}{}{QUIT_HINT}", " ".repeat(padding))
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::styled(self.text(area.width), self.style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Style;

    fn status(panes: Option<usize>, splits: usize) -> StatusBar {
        StatusBar {
            panes,
            splits,
            orientation: Orientation::Vertical,
            style: Style::default(),
        }
    }

    #[test]
    fn test_summary_text() {
        let text = status(Some(5), 4).text(80);
        assert!(text.starts_with("Split View Nesting | 5 panes, 4 splits (Vertical)"));
        assert!(text.ends_with("q Quit"));
        assert_eq!(text.width(), 80);
    }

    #[test]
    fn test_singular_and_empty() {
        assert!(status(Some(1), 1).text(80).contains("1 pane, 1 split"));
        assert!(status(None, 0).text(80).contains("no panes"));
    }

    #[test]
    fn test_narrow_width_keeps_hint() {
        let text = status(Some(3), 2).text(10);
        assert!(text.ends_with(" q Quit"));
    }

    #[test]
    fn test_render() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = status(Some(2), 1);
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("2 panes, 1 split"));
        assert!(text.contains("q Quit"));
    }
}
