//! TUI rendering.
//!
//! Mirrors the browser page: a two-field readout (pending operand with
//! its operator above, current operand below) over the keypad, with a
//! shortcut sidebar. All colors come from the active theme's palette.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::theme::Theme;

/// Application title shown on the outer frame
const APP_TITLE: &str = " deskcalc ";

/// Keyboard shortcuts listed in the help sidebar
const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "type operand"),
    ("+-*/", "operator"),
    ("m", "remainder"),
    ("Enter", "compute"),
    ("Bksp", "delete"),
    ("Esc", "clear"),
    ("r", "square root"),
    ("n", "toggle sign"),
    ("%", "percent"),
    ("t", "theme"),
    ("q", "quit"),
];

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Frame background
    pub background: Color,
    /// Primary text
    pub text: Color,
    /// De-emphasized text (pending line, help)
    pub dim: Color,
    /// Digit and point buttons
    pub digit: Color,
    /// Operator and unary buttons
    pub operator: Color,
    /// The equals button
    pub equals: Color,
    /// The clear button
    pub clear: Color,
    /// Borders
    pub border: Color,
    /// Highlighted button foreground
    pub pressed_fg: Color,
    /// Highlighted button background
    pub pressed_bg: Color,
}

impl Palette {
    /// Returns the palette for a theme
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                dim: Color::DarkGray,
                digit: Color::White,
                operator: Color::Yellow,
                equals: Color::Green,
                clear: Color::Red,
                border: Color::Cyan,
                pressed_fg: Color::Black,
                pressed_bg: Color::Yellow,
            },
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                dim: Color::Gray,
                digit: Color::Black,
                operator: Color::Blue,
                equals: Color::Green,
                clear: Color::Red,
                border: Color::Blue,
                pressed_fg: Color::White,
                pressed_bg: Color::Blue,
            },
        }
    }
}

/// Splits the frame into (pending, current, keypad, help) areas
fn split(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Pending operand + operator
            Constraint::Length(3), // Current operand
            Constraint::Min(12),   // Keypad and help
        ])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // Keypad
            Constraint::Min(20),    // Help sidebar
        ])
        .split(rows[2]);

    (rows[0], rows[1], cols[0], cols[1])
}

/// The keypad's screen area for a given frame size (mouse hit-testing)
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    split(area).2
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    palette: Palette,
}

impl<'a> CalculatorUI<'a> {
    /// Creates the UI widget for the app's current theme
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self {
            app,
            palette: Palette::for_theme(app.theme()),
        }
    }

    fn render_frame(&self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .style(
                Style::default()
                    .bg(self.palette.background)
                    .fg(self.palette.text),
            )
            .render(area, buf);
    }

    fn render_pending(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.app.previous_line())
            .alignment(Alignment::Right)
            .style(Style::default().fg(self.palette.dim))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.dim)),
            )
            .render(area, buf);
    }

    fn render_current(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.app.current_line())
            .alignment(Alignment::Right)
            .style(
                Style::default()
                    .fg(self.palette.text)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.border)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),    // Shortcuts
                Constraint::Length(3), // Theme status
            ])
            .split(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{key:>7}"),
                        Style::default().fg(self.palette.operator),
                    ),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(self.palette.dim)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.dim)),
            )
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            format!("Theme: {}", self.app.theme()),
            Style::default().fg(self.palette.dim),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.palette.dim)),
        )
        .render(chunks[1], buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_frame(area, buf);

        let (pending, current, keypad, help) = split(area);
        self.render_pending(pending, buf);
        self.render_current(current, buf);
        KeypadWidget::new(self.app.keypad(), &self.palette).render(keypad, buf);
        self.render_help(help, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BinaryOp, Token};
    use ratatui::{backend::TestBackend, Terminal};

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).unwrap()
    }

    fn rendered_content(app: &CalculatorApp) -> String {
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    // ===== Palette tests =====

    #[test]
    fn test_palettes_differ_by_theme() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text, light.text);
    }

    #[test]
    fn test_dark_palette_backgrounds() {
        let dark = Palette::for_theme(Theme::Dark);
        assert_eq!(dark.background, Color::Black);
        assert_eq!(dark.text, Color::White);
    }

    // ===== Layout tests =====

    #[test]
    fn test_split_produces_disjoint_rows() {
        let (pending, current, keypad, help) = split(Rect::new(0, 0, 80, 24));
        assert!(pending.y < current.y);
        assert!(current.y < keypad.y);
        assert_eq!(keypad.y, help.y);
        assert!(keypad.x < help.x);
    }

    #[test]
    fn test_keypad_area_matches_split() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(keypad_area(area), split(area).2);
    }

    // ===== Render tests =====

    #[test]
    fn test_render_initial_state() {
        let app = CalculatorApp::new();
        let content = rendered_content(&app);
        assert!(content.contains("deskcalc"));
        assert!(content.contains("Display"));
        assert!(content.contains("Keypad"));
        assert!(content.contains("Help"));
        assert!(content.contains("[7]"));
    }

    #[test]
    fn test_render_shows_current_operand_grouped() {
        let mut app = CalculatorApp::new();
        for d in [1u8, 2, 3, 4] {
            app.press(Token::Digit(d));
        }
        let content = rendered_content(&app);
        assert!(content.contains("1,234"));
    }

    #[test]
    fn test_render_shows_pending_line() {
        let mut app = CalculatorApp::new();
        app.press(Token::Digit(8));
        app.press(Token::Operator(BinaryOp::Divide));
        let content = rendered_content(&app);
        assert!(content.contains("8 ÷"));
    }

    #[test]
    fn test_render_shows_fault_marker() {
        let mut app = CalculatorApp::new();
        for token in [
            Token::Digit(8),
            Token::Operator(BinaryOp::Divide),
            Token::Digit(0),
            Token::Equals,
        ] {
            app.press(token);
        }
        let content = rendered_content(&app);
        assert!(content.contains("Division by zero"));
    }

    #[test]
    fn test_render_shows_theme_name() {
        let mut app = CalculatorApp::new();
        let content = rendered_content(&app);
        assert!(content.contains("Theme: dark"));
        app.toggle_theme();
        let content = rendered_content(&app);
        assert!(content.contains("Theme: light"));
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let app = CalculatorApp::new();
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    // ===== Help constants =====

    #[test]
    fn test_help_shortcuts_cover_essential_keys() {
        let keys: Vec<&str> = HELP_SHORTCUTS.iter().map(|(k, _)| *k).collect();
        assert!(keys.contains(&"Enter"));
        assert!(keys.contains(&"Esc"));
        assert!(keys.contains(&"t"));
        assert!(keys.contains(&"q"));
    }

    #[test]
    fn test_help_shortcuts_have_descriptions() {
        for (key, desc) in HELP_SHORTCUTS {
            assert!(!key.is_empty());
            assert!(!desc.is_empty());
        }
    }
}
