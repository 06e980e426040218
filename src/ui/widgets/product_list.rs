//! Product list widget for displaying the current catalog page

use crate::catalog::Product;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Product list widget that displays one page with a cursor indicator
pub struct ProductList<'a> {
    /// Application state
    state: &'a AppState,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
}

impl<'a> ProductList<'a> {
    /// Create a new product list widget
    #[must_use]
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        let store = &state.store;
        let title = format!(
            " Products  page {}/{}  ({} of {}) ",
            store.current_page(),
            store.page_count(),
            store.filtered().len(),
            store.products().len(),
        );

        Self { state, theme, title }
    }

    /// Render a single product row
    fn render_row(&self, product: &Product, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };

        let text_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(format!("{:>4}", product.id), self.theme.dimmed_style()),
            Span::raw("  "),
            Span::styled(format!("{:>8}", format!("${:.2}", product.price)), self.theme.price_style()),
            Span::raw("  "),
            Span::styled(product.title.clone(), text_style),
            Span::raw("  "),
            Span::styled(format!("[{}]", product.category), self.theme.category_style()),
            Span::raw("  "),
            Span::styled(
                format!("★ {:.1} ({})", product.rating.rate, product.rating.count),
                self.theme.dimmed_style(),
            ),
        ];

        ListItem::new(Line::from(spans))
    }
}

impl Widget for ProductList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let page = self.state.store.current_page_items();

        if page.is_empty() {
            let empty = if self.state.store.search_query().is_empty() {
                "  catalog is empty"
            } else {
                "  no products match the search"
            };
            let line = Line::styled(empty, self.theme.dimmed_style());
            List::new([ListItem::new(line)]).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = page
            .iter()
            .enumerate()
            .map(|(row, product)| self.render_row(product, row == self.state.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}
