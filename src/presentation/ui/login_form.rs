//! Login form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};
use tracing::debug;

use crate::application::dto::{EMAIL_FIELD, PASSWORD_FIELD};
use crate::domain::entities::Submission;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    BUTTON_HEIGHT, BasicButton, ButtonOptions, ButtonType, INPUT_FIELD_HEIGHT, InputField,
    InputOptions, InputType,
};

const EMAIL_LABEL: &str = "Correo electrónico";
const PASSWORD_LABEL: &str = "Contraseña";
const SUBMIT_LABEL: &str = "Iniciar sesión";

/// Result of a key press on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Nothing to dispatch.
    None,
    /// The form was submitted with these values.
    Submit(Submission),
    /// Submission was blocked by an empty required field.
    Blocked { field: String },
}

/// Email and password inputs with a submit button.
pub struct LoginForm {
    fields: Vec<InputField>,
    button: BasicButton,
    focus: usize,
}

impl LoginForm {
    /// Rows taken by the rendered form.
    pub const HEIGHT: u16 = INPUT_FIELD_HEIGHT * 2 + BUTTON_HEIGHT + 2;

    /// Creates the form with the email field focused.
    #[must_use]
    pub fn new() -> Self {
        let email = InputField::new(
            EMAIL_FIELD,
            EMAIL_LABEL,
            InputOptions::new(InputType::Text)
                .identifier(EMAIL_FIELD)
                .autocomplete("email")
                .required(),
        );
        let password = InputField::new(
            PASSWORD_FIELD,
            PASSWORD_LABEL,
            InputOptions::new(InputType::Password)
                .identifier(PASSWORD_FIELD)
                .autocomplete("current-password")
                .required(),
        );
        let button = BasicButton::new(ButtonOptions::new(ButtonType::Submit), SUBMIT_LABEL);

        let mut form = Self {
            fields: vec![email, password],
            button,
            focus: 0,
        };
        form.apply_focus();
        form
    }

    /// Returns the input fields in order.
    #[must_use]
    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    /// Returns the field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Returns the field with the given name for editing.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut InputField> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Returns the button.
    #[must_use]
    pub const fn button(&self) -> &BasicButton {
        &self.button
    }

    /// Returns the index of the focused control; the button comes last.
    #[must_use]
    pub const fn focus_index(&self) -> usize {
        self.focus
    }

    fn control_count(&self) -> usize {
        self.fields.len() + 1
    }

    fn focused_field_mut(&mut self) -> Option<&mut InputField> {
        self.fields.get_mut(self.focus)
    }

    fn apply_focus(&mut self) {
        let focus = self.focus;
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(i == focus);
        }
        self.button.set_focused(focus == self.fields.len());
    }

    /// Moves focus to the given control.
    pub fn focus(&mut self, index: usize) {
        self.focus = index.min(self.control_count() - 1);
        self.apply_focus();
    }

    /// Moves focus to the next control, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus((self.focus + 1) % self.control_count());
    }

    /// Moves focus to the previous control, wrapping around.
    pub fn focus_previous(&mut self) {
        let count = self.control_count();
        self.focus((self.focus + count - 1) % count);
    }

    /// Collects every named field into a submission.
    #[must_use]
    pub fn collect(&self) -> Submission {
        self.fields
            .iter()
            .map(|field| (field.name(), field.value()))
            .collect()
    }

    /// Submits after checking required fields.
    ///
    /// The first empty required field is focused and flagged, and no
    /// submission is produced.
    pub fn request_submit(&mut self) -> FormAction {
        if let Some(index) = self.fields.iter().position(InputField::is_missing) {
            let name = self.fields[index].name().to_string();
            debug!(field = %name, "Submission blocked by required field");
            self.fields[index].set_invalid(true);
            self.focus(index);
            return FormAction::Blocked { field: name };
        }

        FormAction::Submit(self.collect())
    }

    /// Submits without checking required fields.
    #[must_use]
    pub fn submit(&self) -> Submission {
        self.collect()
    }

    /// Clears every field and focuses the first one.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focus(0);
    }

    fn activate_button(&mut self) -> FormAction {
        if !self.button.is_enabled() {
            return FormAction::None;
        }
        match self.button.button_type() {
            ButtonType::Submit => self.request_submit(),
            ButtonType::Reset => {
                self.reset();
                FormAction::None
            }
            ButtonType::Button => FormAction::None,
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Enter => {
                if self.button.is_focused() {
                    return self.activate_button();
                }
                return self.request_submit();
            }
            KeyCode::Char(' ') if self.button.is_focused() => return self.activate_button(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(field) = self.focused_field_mut() {
                    field.input_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field_mut() {
                    field.backspace();
                }
            }
            KeyCode::Delete => {
                if let Some(field) = self.focused_field_mut() {
                    field.delete();
                }
            }
            KeyCode::Left => {
                if let Some(field) = self.focused_field_mut() {
                    field.move_left();
                }
            }
            KeyCode::Right => {
                if let Some(field) = self.focused_field_mut() {
                    field.move_right();
                }
            }
            KeyCode::Home => {
                if let Some(field) = self.focused_field_mut() {
                    field.move_start();
                }
            }
            KeyCode::End => {
                if let Some(field) = self.focused_field_mut() {
                    field.move_end();
                }
            }
            _ => {}
        }

        FormAction::None
    }

    /// Renders the form using theme styles.
    pub fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let mut constraints = Vec::with_capacity(self.fields.len() * 2 + 1);
        for _ in &self.fields {
            constraints.push(Constraint::Length(INPUT_FIELD_HEIGHT));
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(BUTTON_HEIGHT));

        let areas = Layout::vertical(constraints).split(area);

        for (i, field) in self.fields.iter().enumerate() {
            field.render_themed(areas[i * 2], buf, theme);
        }
        self.button
            .render_themed(areas[self.fields.len() * 2], buf, theme);
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &LoginForm {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_themed(area, buf, &Theme::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::{REQUIRED_NOTICE, buffer_lines};
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut LoginForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn filled_form(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        type_text(&mut form, email);
        form.handle_key(key(KeyCode::Tab));
        type_text(&mut form, password);
        form
    }

    #[test]
    fn test_initial_state() {
        let form = LoginForm::new();

        assert_eq!(form.fields().len(), 2);
        assert_eq!(form.focus_index(), 0);
        assert!(form.fields()[0].is_focused());
        assert_eq!(form.button().button_type(), ButtonType::Submit);
        assert_eq!(form.button().content(), "Iniciar sesión");
    }

    #[test]
    fn test_field_configuration() {
        let form = LoginForm::new();
        let email = form.field("email").unwrap();
        let password = form.field("password").unwrap();

        assert_eq!(email.label(), "Correo electrónico");
        assert_eq!(email.input_type(), InputType::Text);
        assert_eq!(email.options().autocomplete.as_deref(), Some("email"));
        assert!(email.is_required());

        assert_eq!(password.label(), "Contraseña");
        assert_eq!(password.input_type(), InputType::Password);
        assert_eq!(
            password.options().autocomplete.as_deref(),
            Some("current-password")
        );
        assert!(password.is_required());
    }

    #[test]
    fn test_submit_scenario() {
        let mut form = filled_form("user@test.com", "hunter2");

        let action = form.handle_key(key(KeyCode::Enter));

        let submission = match action {
            FormAction::Submit(submission) => submission,
            other => panic!("expected submission, got {other:?}"),
        };
        assert_eq!(submission.get("email"), Some("user@test.com"));
        assert_eq!(submission.get("password"), Some("hunter2"));
        assert_eq!(submission.len(), 2);
    }

    #[test_case("", "hunter2", "email" ; "empty_email")]
    #[test_case("user@test.com", "", "password" ; "empty_password")]
    #[test_case("", "", "email" ; "both_empty")]
    fn test_required_fields_block_submission(email: &str, password: &str, blocked: &str) {
        let mut form = filled_form(email, password);

        let action = form.request_submit();

        assert_eq!(
            action,
            FormAction::Blocked {
                field: blocked.to_string()
            }
        );
        let field = form.field(blocked).unwrap();
        assert!(field.is_invalid());
        assert!(field.is_focused());
    }

    #[test]
    fn test_direct_submit_bypasses_required_check() {
        let form = LoginForm::new();

        let submission = form.submit();

        assert_eq!(submission.get("email"), Some(""));
        assert_eq!(submission.get("password"), Some(""));
    }

    #[test_case(KeyCode::Tab, 0, 1 ; "tab_from_email")]
    #[test_case(KeyCode::Tab, 2, 0 ; "tab_wraps")]
    #[test_case(KeyCode::Down, 1, 2 ; "down_to_button")]
    #[test_case(KeyCode::BackTab, 0, 2 ; "backtab_wraps")]
    #[test_case(KeyCode::Up, 2, 1 ; "up_from_button")]
    fn test_focus_navigation(code: KeyCode, from: usize, to: usize) {
        let mut form = LoginForm::new();
        form.focus(from);

        form.handle_key(key(code));

        assert_eq!(form.focus_index(), to);
    }

    #[test]
    fn test_space_on_button_submits() {
        let mut form = filled_form("a@b.c", "pw");
        form.handle_key(key(KeyCode::Tab));
        assert!(form.button().is_focused());

        assert!(matches!(
            form.handle_key(key(KeyCode::Char(' '))),
            FormAction::Submit(_)
        ));
    }

    #[test]
    fn test_space_in_field_is_text() {
        let mut form = LoginForm::new();
        type_text(&mut form, "a b");
        assert_eq!(form.field("email").unwrap().value(), "a b");
    }

    #[test]
    fn test_control_chords_are_not_typed() {
        let mut form = LoginForm::new();
        form.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(form.field("email").unwrap().value(), "");
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = filled_form("user@test.com", "hunter2");

        form.reset();

        assert!(form.fields().iter().all(|f| f.value().is_empty()));
        assert_eq!(form.focus_index(), 0);
    }

    #[test]
    fn test_render_two_inputs_and_one_button() {
        let form = LoginForm::new();
        let area = Rect::new(0, 0, 40, LoginForm::HEIGHT);
        let mut buf = Buffer::empty(area);

        (&form).render(area, &mut buf);

        let lines = buffer_lines(&buf);
        let text = lines.join("\n");
        assert_eq!(text.matches("Correo electrónico").count(), 1);
        assert_eq!(text.matches("Contraseña").count(), 1);
        assert_eq!(text.matches("Iniciar sesión").count(), 1);
        assert!(!text.contains(REQUIRED_NOTICE));
        assert_eq!(lines.iter().filter(|l| l.starts_with('╭')).count(), 3);
    }
}
