//! # OptionsBar Component
//!
//! The single-line control strip above the panes:
//!
//! ```text
//! Number Of Views:5         [ ] Horizontal [x] Border [x] Titles [ ] Use Labels
//! ```
//!
//! The count field is internal state: digits, `-`/`+` and Backspace edit it,
//! and every edit emits `ConfigChange::PaneCountText` with the raw text so
//! the controller can apply its own parsing rules. The four toggles are
//! props synced from the controller's options each frame; their hotkey is
//! the highlighted first letter.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::builder::LayoutOptions;
use crate::core::content::ContentKind;
use crate::core::controller::ConfigChange;
use crate::core::theme::ColorScheme;
use crate::core::tree::Orientation;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Width of the pane count field, in cells.
pub const FIELD_WIDTH: usize = 10;

const FIELD_LABEL: &str = "Number Of Views:";

pub struct OptionsBar {
    /// Pane count field contents (Internal State)
    pub text: String,
    /// Toggle states (Props)
    pub horizontal: bool,
    pub border: bool,
    pub titles: bool,
    pub labels: bool,
    /// Colors (Prop)
    pub scheme: ColorScheme,
}

impl OptionsBar {
    pub fn new(text: impl Into<String>, scheme: ColorScheme) -> Self {
        Self {
            text: text.into(),
            horizontal: false,
            border: false,
            titles: false,
            labels: false,
            scheme,
        }
    }

    /// Copy toggle states from the controller's current options.
    pub fn sync(&mut self, options: &LayoutOptions) {
        self.horizontal = options.orientation == Orientation::Horizontal;
        self.border = options.border;
        self.titles = options.titles.is_enabled();
        self.labels = options.content_kind == ContentKind::Label;
    }

    fn toggle_spans(&self, label: &'static str, checked: bool) -> Vec<Span<'static>> {
        let normal = self.scheme.normal.style();
        let (hot, rest) = label.split_at(1);
        vec![
            Span::styled(if checked { " [x] " } else { " [ ] " }, normal),
            Span::styled(hot, self.scheme.hot_normal.style()),
            Span::styled(rest, normal),
        ]
    }
}

impl EventHandler for OptionsBar {
    type Event = ConfigChange;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ConfigChange> {
        match event {
            TuiEvent::InputChar(c) if c.is_ascii_digit() || *c == '-' || *c == '+' => {
                if self.text.len() >= FIELD_WIDTH {
                    return None;
                }
                self.text.push(*c);
                Some(ConfigChange::PaneCountText(self.text.clone()))
            }
            TuiEvent::Backspace => {
                self.text.pop()?;
                Some(ConfigChange::PaneCountText(self.text.clone()))
            }
            TuiEvent::InputChar('h') => Some(ConfigChange::ToggleOrientation),
            TuiEvent::InputChar('b') => Some(ConfigChange::ToggleBorder),
            TuiEvent::InputChar('t') => Some(ConfigChange::ToggleTitles),
            TuiEvent::InputChar('u') => Some(ConfigChange::ToggleContentKind),
            _ => None,
        }
    }
}

impl Component for OptionsBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let normal = self.scheme.normal.style();
        let mut spans = vec![
            Span::styled(FIELD_LABEL, normal),
            Span::styled(
                format!("{:<width$}", self.text, width = FIELD_WIDTH),
                self.scheme.focus.style(),
            ),
        ];
        spans.extend(self.toggle_spans("Horizontal", self.horizontal));
        spans.extend(self.toggle_spans("Border", self.border));
        spans.extend(self.toggle_spans("Titles", self.titles));
        spans.extend(self.toggle_spans("Use Labels", self.labels));

        frame.render_widget(Paragraph::new(Line::from(spans)).style(normal), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::TitlePolicy;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn bar(text: &str) -> OptionsBar {
        OptionsBar::new(text, ColorScheme::base())
    }

    fn rendered(bar: &mut OptionsBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_digits_edit_count_field() {
        let mut bar = bar("2");
        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('4')),
            Some(ConfigChange::PaneCountText("24".into()))
        );
        assert_eq!(
            bar.handle_event(&TuiEvent::Backspace),
            Some(ConfigChange::PaneCountText("2".into()))
        );
        assert_eq!(
            bar.handle_event(&TuiEvent::Backspace),
            Some(ConfigChange::PaneCountText(String::new()))
        );
        // Nothing left to delete.
        assert_eq!(bar.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_sign_is_passed_through() {
        let mut bar = bar("");
        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('-')),
            Some(ConfigChange::PaneCountText("-".into()))
        );
    }

    #[test]
    fn test_field_width_limit() {
        let mut bar = bar("1234567890");
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('1')), None);
        assert_eq!(bar.text, "1234567890");
    }

    #[test]
    fn test_hotkeys_emit_toggles() {
        let mut bar = bar("2");
        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('h')),
            Some(ConfigChange::ToggleOrientation)
        );
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('b')), Some(ConfigChange::ToggleBorder));
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('t')), Some(ConfigChange::ToggleTitles));
        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('u')),
            Some(ConfigChange::ToggleContentKind)
        );
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_sync_from_options() {
        let mut bar = bar("3");
        bar.sync(&LayoutOptions {
            pane_count: 3,
            orientation: Orientation::Horizontal,
            border: true,
            titles: TitlePolicy::Numbered,
            content_kind: ContentKind::Label,
        });
        assert!(bar.horizontal && bar.border && bar.titles && bar.labels);
    }

    #[test]
    fn test_render_shows_field_and_checkboxes() {
        let mut bar = bar("12");
        bar.border = true;
        let text = rendered(&mut bar);
        assert!(text.starts_with("Number Of Views:12"));
        assert!(text.contains("[ ] Horizontal"));
        assert!(text.contains("[x] Border"));
        assert!(text.contains("[ ] Titles"));
        assert!(text.contains("[ ] Use Labels"));
    }
}
