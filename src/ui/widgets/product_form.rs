//! Modal form widget shared by the add and edit flows
//!
//! One field per product attribute, edited a line at a time:
//! - Tab / Down move to the next field, Shift+Tab / Up to the previous
//! - Enter submits the whole form, ESC cancels
//!
//! Buffers are free text; numeric fields that fail to parse at submit time
//! are treated as absent rather than blocking the commit.

use crate::catalog::{Product, ProductDraft};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Field positions within the form, in display order
const FIELD_TITLE: usize = 0;
const FIELD_PRICE: usize = 1;
const FIELD_DESCRIPTION: usize = 2;
const FIELD_CATEGORY: usize = 3;
const FIELD_IMAGE: usize = 4;
const FIELD_RATE: usize = 5;
const FIELD_COUNT: usize = 6;

const FIELD_LABELS: [&str; 7] = [
    "title",
    "price",
    "description",
    "category",
    "image",
    "rating rate",
    "rating count",
];

/// One editable line of the form
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label
    pub label: &'static str,
    /// Current text buffer
    pub buffer: String,
    /// Cursor position (character index, not byte)
    pub cursor: usize,
}

impl FormField {
    fn new(label: &'static str, value: String) -> Self {
        let cursor = value.chars().count();
        Self {
            label,
            buffer: value,
            cursor,
        }
    }

    /// Byte index matching the character cursor
    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_idx = self.byte_index();
            let prev_byte_idx = self.buffer[..byte_idx]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.buffer.remove(prev_byte_idx);
            self.cursor -= 1;
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        let byte_idx = self.byte_index();
        if byte_idx < self.buffer.len() {
            self.buffer.remove(byte_idx);
        }
    }

    /// Move the cursor one character left
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right
    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }
}

/// State for the add/edit form modal
#[derive(Debug, Clone)]
pub struct FormState {
    /// Modal title (" Add Product " or " Edit Product #id ")
    pub title: String,
    /// Editable fields in display order
    pub fields: Vec<FormField>,
    /// Index of the focused field
    pub active: usize,
}

impl FormState {
    /// Empty form for creating a new product
    #[must_use]
    pub fn for_create() -> Self {
        Self {
            title: " Add Product ".to_string(),
            fields: FIELD_LABELS
                .into_iter()
                .map(|label| FormField::new(label, String::new()))
                .collect(),
            active: 0,
        }
    }

    /// Form prefilled from an existing product for editing
    #[must_use]
    pub fn for_edit(product: &Product) -> Self {
        let values = [
            product.title.clone(),
            format_number(product.price),
            product.description.clone(),
            product.category.clone(),
            product.image.clone(),
            format_number(product.rating.rate),
            product.rating.count.to_string(),
        ];

        Self {
            title: format!(" Edit Product #{} ", product.id),
            fields: FIELD_LABELS
                .into_iter()
                .zip(values)
                .map(|(label, value)| FormField::new(label, value))
                .collect(),
            active: 0,
        }
    }

    /// Focus the next field, wrapping around
    pub fn next_field(&mut self) {
        self.active = (self.active + 1) % self.fields.len();
    }

    /// Focus the previous field, wrapping around
    pub fn prev_field(&mut self) {
        self.active = self
            .active
            .checked_sub(1)
            .unwrap_or(self.fields.len() - 1);
    }

    /// The focused field
    pub fn active_field_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.active]
    }

    /// Convert buffers into a draft, collecting warnings for numeric
    /// buffers that did not parse (those fields are left absent)
    #[must_use]
    pub fn to_draft(&self) -> (ProductDraft, Vec<String>) {
        let mut warnings = Vec::new();

        let text = |idx: usize| -> Option<String> {
            let value = &self.fields[idx].buffer;
            if value.is_empty() {
                None
            } else {
                Some(value.clone())
            }
        };

        let price = self.parse_field(FIELD_PRICE, &mut warnings);
        let rate = self.parse_field(FIELD_RATE, &mut warnings);
        let count = self.parse_field(FIELD_COUNT, &mut warnings);

        let draft = ProductDraft {
            title: text(FIELD_TITLE),
            price,
            description: text(FIELD_DESCRIPTION),
            category: text(FIELD_CATEGORY),
            image: text(FIELD_IMAGE),
            rating_rate: rate,
            rating_count: count,
        };
        (draft, warnings)
    }

    fn parse_field<T: std::str::FromStr>(&self, idx: usize, warnings: &mut Vec<String>) -> Option<T> {
        let field = &self.fields[idx];
        let trimmed = field.buffer.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warnings.push(format!(
                    "{} '{}' is not a number, field left empty",
                    field.label, trimmed
                ));
                None
            }
        }
    }
}

/// Render a float without trailing noise ("4.5", not "4.50000")
fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Add/edit form overlay widget
pub struct ProductForm<'a> {
    state: &'a FormState,
    theme: &'a Theme,
}

impl<'a> ProductForm<'a> {
    /// Create a new form widget
    #[must_use]
    pub const fn new(state: &'a FormState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }

    /// Render one field line with cursor when focused
    fn field_line(&self, field: &FormField, focused: bool) -> Line<'static> {
        let label_style = if focused {
            self.theme.cursor_style()
        } else {
            self.theme.dimmed_style()
        };

        let mut spans = vec![Span::styled(format!("{:<13}", field.label), label_style)];

        if focused {
            let byte_idx = field.byte_index();
            let (before, after) = field.buffer.split_at(byte_idx);
            spans.push(Span::raw(before.to_string()));
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
            spans.push(Span::raw(after.to_string()));
        } else {
            spans.push(Span::raw(field.buffer.clone()));
        }

        Line::from(spans)
    }
}

impl Widget for ProductForm<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = self.state.fields.len() as u16 + 5;
        let width = 60.min(area.width.saturating_sub(4));
        let modal_area = Self::centered_rect(width, height, area);

        // Clear background
        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .title(self.state.title.clone())
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let mut constraints = vec![Constraint::Length(1)]; // spacing
        constraints.extend(
            std::iter::repeat(Constraint::Length(1)).take(self.state.fields.len()),
        );
        constraints.push(Constraint::Length(1)); // spacing
        constraints.push(Constraint::Length(1)); // help

        let chunks = Layout::vertical(constraints).split(inner);

        for (i, field) in self.state.fields.iter().enumerate() {
            let line = self.field_line(field, i == self.state.active);
            Paragraph::new(line).render(chunks[i + 1], buf);
        }

        let help = Paragraph::new("Tab: next field | Enter: save | ESC: cancel")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center);
        help.render(chunks[self.state.fields.len() + 2], buf);
    }
}
