//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget and full-frame tests can assert
//! on rendered text without a real terminal.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::{Frame, Terminal};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 48;

/// Test wrapper around a `TestBackend` terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        self.terminal
            .draw(|frame| frame.render_stateful_widget(widget, area, state))
            .expect("Failed to render stateful widget");
    }

    /// Draw a full frame, e.g. `render::view`.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// First row whose text contains `text`.
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|y| line_content(buffer, *y).contains(text))
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// Trimmed, non-empty rows of text inside `area`.
    pub fn text_in(&self, area: Rect) -> Vec<String> {
        let buffer = self.buffer();
        let area = area.intersection(buffer.area);
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .filter(|row| !row.is_empty())
            .collect()
    }

    /// Whole buffer as text, for debugging failed assertions
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_custom_size() {
        let term = TestTerminal::with_size(100, 50);
        assert_eq!(term.area(), Rect::new(0, 0, 100, 50));
    }

    #[test]
    fn test_buffer_contains_and_find_line() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("\n\nHello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert_eq!(term.find_line("Hello"), Some(2));
        assert_eq!(term.cell_at(0, 2), Some("H"));
    }

    #[test]
    fn test_text_in_skips_blank_rows() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("\n  Hello\n\nWorld"), term.area());

        assert_eq!(term.text_in(Rect::new(0, 0, 20, 5)), vec!["Hello", "World"]);
        assert_eq!(term.text_in(Rect::new(0, 0, 4, 2)), vec!["He"]);
    }
}
