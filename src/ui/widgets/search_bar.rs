//! Search bar widget for the live title filter

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with a trailing cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, theme: &'a Theme) -> Self {
        Self { query, theme }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(">", self.theme.dimmed_style()), Span::raw(" ")];

        spans.push(Span::raw(self.query));
        spans.push(Span::styled(
            "│",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));

        if self.query.is_empty() {
            spans.push(Span::styled(
                " type to filter by title",
                self.theme.dimmed_style(),
            ));
        }

        let line = Line::from(spans);
        Paragraph::new(line).render(inner, buf);
    }
}
