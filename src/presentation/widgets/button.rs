//! Button widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Rows taken by a rendered button.
pub const BUTTON_HEIGHT: u16 = 3;

/// Behavior of a button inside a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    /// Submits the enclosing form.
    #[default]
    Submit,
    /// Does nothing by itself.
    Button,
    /// Resets the enclosing form.
    Reset,
}

impl ButtonType {
    /// Returns the type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Button => "button",
            Self::Reset => "reset",
        }
    }
}

/// Configuration of a button control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonOptions {
    /// Button behavior.
    pub button_type: ButtonType,
    /// Whether activation is ignored.
    pub disabled: bool,
}

impl ButtonOptions {
    /// Creates options for the given button type.
    #[must_use]
    pub const fn new(button_type: ButtonType) -> Self {
        Self {
            button_type,
            disabled: false,
        }
    }

    /// Disables the button.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Bordered button showing its child text.
#[derive(Debug, Clone)]
pub struct BasicButton {
    options: ButtonOptions,
    content: String,
    focused: bool,
}

impl BasicButton {
    /// Creates a button with options and child text.
    #[must_use]
    pub fn new(options: ButtonOptions, content: impl Into<String>) -> Self {
        Self {
            options,
            content: content.into(),
            focused: false,
        }
    }

    /// Returns the button type.
    #[must_use]
    pub const fn button_type(&self) -> ButtonType {
        self.options.button_type
    }

    /// Returns the child text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns whether the button can be activated.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.options.disabled
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

    /// Renders the button using theme styles.
    pub fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let style = if self.options.disabled {
            theme.surface_style.patch(theme.dimmed_style)
        } else if self.focused {
            theme.focused_style
        } else {
            theme.surface_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(theme.surface_style);

        Paragraph::new(self.content.as_str())
            .style(style)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

impl Widget for &BasicButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_themed(area, buf, &Theme::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::buffer_lines;

    #[test]
    fn test_submit_button_shows_exact_text() {
        let button = BasicButton::new(ButtonOptions::new(ButtonType::Submit), "Iniciar sesión");
        let area = Rect::new(0, 0, 24, BUTTON_HEIGHT);
        let mut buf = Buffer::empty(area);

        (&button).render(area, &mut buf);

        assert_eq!(button.button_type().as_str(), "submit");
        assert_eq!(button.content(), "Iniciar sesión");
        let middle = buffer_lines(&buf)[1].clone();
        assert_eq!(middle.trim_matches(['│', ' ']), "Iniciar sesión");
    }

    #[test]
    fn test_disabled_button() {
        let button = BasicButton::new(ButtonOptions::new(ButtonType::Button).disabled(), "x");
        assert!(!button.is_enabled());
        assert_eq!(ButtonOptions::default().button_type, ButtonType::Submit);
    }
}
