//! Login page.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget},
};

use crate::presentation::theme::Theme;
use crate::presentation::ui::login_form::{FormAction, LoginForm};

const HEADING: &str = "Iniciar Sesión";

const BREAKPOINT_SM: u16 = 64;
const BREAKPOINT_MD: u16 = 96;
const BREAKPOINT_LG: u16 = 128;

/// Width of the page container for the given terminal width.
///
/// Full width minus a one-cell margin on narrow terminals, then two thirds,
/// one half and one third at the wider breakpoints.
#[must_use]
pub const fn container_width(available: u16) -> u16 {
    let full = available.saturating_sub(2);
    let width = if available >= BREAKPOINT_LG {
        available / 3
    } else if available >= BREAKPOINT_MD {
        available / 2
    } else if available >= BREAKPOINT_SM {
        available * 2 / 3
    } else {
        full
    };
    if width < full { width } else { full }
}

/// Heading and login form inside a centered container.
pub struct LoginPage {
    form: LoginForm,
    theme: Theme,
}

impl LoginPage {
    /// Rows taken by the bordered container.
    pub const CONTAINER_HEIGHT: u16 = LoginForm::HEIGHT + 6;

    /// Creates the page.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            form: LoginForm::new(),
            theme,
        }
    }

    /// Returns the heading text.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        HEADING
    }

    /// Returns the form.
    #[must_use]
    pub const fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Returns the form for editing.
    pub fn form_mut(&mut self) -> &mut LoginForm {
        &mut self.form
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        self.form.handle_key(key)
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let [body, hints] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(Self::CONTAINER_HEIGHT),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(body);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(container_width(area.width)),
            Constraint::Fill(1),
        ]);
        let [_, container, _] = horizontal.areas(center);

        Clear.render(container, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.surface_style)
            .style(self.theme.surface_style)
            .padding(Padding::uniform(1));

        let inner = block.inner(container);
        block.render(container, buf);

        let [heading_area, _, form_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(LoginForm::HEIGHT),
        ])
        .areas(inner);

        Paragraph::new(HEADING)
            .style(self.theme.heading_style)
            .alignment(Alignment::Center)
            .render(heading_area, buf);

        self.form.render_themed(form_area, buf, &self.theme);

        let hint_line = Line::from(vec![
            Span::styled("Tab: Siguiente campo", self.theme.dimmed_style),
            Span::raw(" | "),
            Span::styled("Enter: Iniciar sesión", self.theme.dimmed_style),
            Span::raw(" | "),
            Span::styled("Esc: Salir", self.theme.dimmed_style),
        ]);
        Paragraph::new(hint_line)
            .alignment(Alignment::Center)
            .render(hints, buf);
    }
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Widget for &LoginPage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::buffer_lines;
    use test_case::test_case;

    #[test_case(40, 38 ; "narrow_full_width")]
    #[test_case(63, 61 ; "just_below_sm")]
    #[test_case(65, 43 ; "sm_rounds_after_scaling")]
    #[test_case(90, 60 ; "sm_two_thirds")]
    #[test_case(100, 50 ; "md_half")]
    #[test_case(150, 50 ; "lg_third")]
    #[test_case(1, 0 ; "tiny")]
    fn test_container_width(available: u16, expected: u16) {
        assert_eq!(container_width(available), expected);
    }

    #[test]
    fn test_page_structure() {
        let page = LoginPage::default();

        assert_eq!(page.heading(), "Iniciar Sesión");
        assert_eq!(page.form().fields().len(), 2);
        assert_eq!(
            page.form().button().button_type(),
            crate::presentation::widgets::ButtonType::Submit
        );
    }

    #[test]
    fn test_render_single_heading_and_form() {
        let page = LoginPage::default();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);

        (&page).render(area, &mut buf);

        let text = buffer_lines(&buf).join("\n");
        assert_eq!(text.matches(HEADING).count(), 1);
        assert_eq!(text.matches("Correo electrónico").count(), 1);
        assert_eq!(text.matches("Contraseña").count(), 1);
        // Button label plus the key hint.
        assert_eq!(text.matches("Iniciar sesión").count(), 2);
        assert_eq!(text.matches("Esc: Salir").count(), 1);
    }

    #[test]
    fn test_heading_is_centered_in_container() {
        let page = LoginPage::default();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);

        (&page).render(area, &mut buf);

        let lines = buffer_lines(&buf);
        let heading_row = lines.iter().find(|l| l.contains(HEADING)).unwrap();
        let start = heading_row.find(HEADING).unwrap();
        let left = heading_row[..start].chars().count();
        let right = heading_row[start + HEADING.len()..].chars().count();
        assert!(left.abs_diff(right) <= 1);
    }

    #[test]
    fn test_render_survives_cramped_terminals() {
        let page = LoginPage::default();

        for width in 0..140 {
            for height in 0..32 {
                let area = Rect::new(0, 0, width, height);
                let mut buf = Buffer::empty(area);
                (&page).render(area, &mut buf);
            }
        }
    }

    #[test]
    fn test_render_short_terminal_keeps_hint_row() {
        let page = LoginPage::default();
        let area = Rect::new(0, 0, 80, 2);
        let mut buf = Buffer::empty(area);

        (&page).render(area, &mut buf);

        assert!(buffer_lines(&buf)[1].contains("Esc: Salir"));
    }
}
