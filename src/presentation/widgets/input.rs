//! Labeled input field widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::Theme;

/// Notice shown when submission is blocked by an empty required field.
pub const REQUIRED_NOTICE: &str = "Completa este campo.";

/// Rows taken by a rendered input field.
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Kind of input control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Plain text.
    #[default]
    Text,
    /// Email address.
    Email,
    /// Password, rendered masked.
    Password,
}

impl InputType {
    /// Returns the type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Configuration of an input control.
///
/// Unknown keys are rejected when deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputOptions {
    /// Control type.
    pub input_type: InputType,
    /// Control identifier; the field name is used when unset.
    pub identifier: Option<String>,
    /// Autocomplete hint, e.g. `email` or `current-password`.
    pub autocomplete: Option<String>,
    /// Whether a value is mandatory before submission.
    pub required: bool,
    /// Text shown while the value is empty.
    pub placeholder: Option<String>,
}

impl InputOptions {
    /// Creates options for the given control type.
    #[must_use]
    pub fn new(input_type: InputType) -> Self {
        Self {
            input_type,
            ..Self::default()
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Sets the autocomplete hint.
    #[must_use]
    pub fn autocomplete(mut self, hint: impl Into<String>) -> Self {
        self.autocomplete = Some(hint.into());
        self
    }

    /// Marks the control as mandatory.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

/// Label paired with a single-line input control.
#[derive(Debug, Clone)]
pub struct InputField {
    name: String,
    label: String,
    options: InputOptions,
    value: String,
    cursor: usize,
    focused: bool,
    invalid: bool,
}

impl InputField {
    /// Creates a field with name, label and options.
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>, options: InputOptions) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            options,
            value: String::new(),
            cursor: 0,
            focused: false,
            invalid: false,
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the identifier the label points at.
    #[must_use]
    pub fn label_target(&self) -> &str {
        &self.name
    }

    /// Returns the control identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.options.identifier.as_deref().unwrap_or(&self.name)
    }

    /// Returns the control options.
    #[must_use]
    pub const fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Returns the control type.
    #[must_use]
    pub const fn input_type(&self) -> InputType {
        self.options.input_type
    }

    /// Returns whether the control is mandatory.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.options.required
    }

    /// Returns whether a mandatory value is missing.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.options.required && self.value.is_empty()
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns focus state.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Flags the field after a blocked submission.
    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    /// Returns whether the required notice is shown.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets value and moves the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
        self.invalid = false;
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.invalid = false;
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        self.invalid = false;
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn display_text(&self) -> String {
        if self.value.is_empty() {
            self.options.placeholder.clone().unwrap_or_default()
        } else if self.options.input_type == InputType::Password {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    fn cursor_column(&self) -> usize {
        if self.options.input_type == InputType::Password {
            return self.cursor;
        }
        let prefix: String = self.value.chars().take(self.cursor).collect();
        prefix.width()
    }

    /// Renders the field using theme styles.
    pub fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let [label_area, control_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(area);

        Paragraph::new(self.label.as_str())
            .style(theme.surface_style)
            .render(label_area, buf);

        let border_style = if self.invalid {
            theme.invalid_style
        } else if self.focused {
            theme.focused_style
        } else {
            theme.surface_style
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(theme.surface_style);
        if self.invalid {
            block = block.title_bottom(Line::styled(REQUIRED_NOTICE, theme.invalid_style));
        }

        let inner = block.inner(control_area);
        block.render(control_area, buf);

        let text_style = if self.value.is_empty() {
            theme.surface_style.patch(theme.dimmed_style)
        } else {
            theme.surface_style
        };
        Paragraph::new(self.display_text())
            .style(text_style)
            .render(inner, buf);

        if self.focused && !inner.is_empty() {
            let column = u16::try_from(self.cursor_column()).unwrap_or(u16::MAX);
            let cursor = Position::new(inner.x.saturating_add(column), inner.y);
            if inner.contains(cursor)
                && let Some(cell) = buf.cell_mut(cursor)
            {
                cell.set_style(Style::default().bg(theme.accent).fg(Color::Black));
            }
        }
    }
}

impl Widget for &InputField {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_themed(area, buf, &Theme::default());
    }
}
