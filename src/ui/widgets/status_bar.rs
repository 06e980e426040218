//! Status bar widget for displaying messages and session stats

use crate::ui::state::{MessageLevel, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the most recent message
pub struct StatusBar<'a> {
    /// Messages to display
    messages: &'a [&'a StatusMessage],
    /// Theme for styling
    theme: &'a Theme,
    /// Products in the catalog
    product_count: usize,
    /// Local mutations this session
    mutations: usize,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        messages: &'a [&'a StatusMessage],
        theme: &'a Theme,
        product_count: usize,
        mutations: usize,
    ) -> Self {
        Self {
            messages,
            theme,
            product_count,
            mutations,
        }
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(inner);

        // Left side: most recent active message
        if let Some(msg) = self.messages.last() {
            let style = self.style_for_level(msg.level);
            let prefix = Self::prefix_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        // Right side: session stats
        let stats = format!("{} products · {} edits", self.product_count, self.mutations);
        Paragraph::new(Line::styled(stats, self.theme.dimmed_style())).render(chunks[1], buf);
    }
}
