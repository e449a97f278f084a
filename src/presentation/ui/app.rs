//! Application shell.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::application::dto::{LoginRequest, LoginResponse, SubmissionSource};
use crate::application::use_cases::LoginUseCase;
use crate::domain::entities::Submission;
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::routes::Route;
use crate::presentation::theme::Theme;
use crate::presentation::ui::{FormAction, LoginPage};

#[derive(Debug)]
enum Action {
    LoginFinished {
        id: u64,
        result: Result<LoginResponse, AuthError>,
    },
}

/// Latest submission still waiting for its result.
struct PendingLogin {
    id: u64,
    submission: Submission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

enum CurrentScreen {
    Login(LoginPage),
    Unmatched,
}

/// Terminal application hosting the routed screen.
pub struct App {
    state: AppState,
    route: Option<Route>,
    screen: CurrentScreen,
    login_use_case: LoginUseCase,
    next_login_id: u64,
    pending_login: Option<PendingLogin>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Creates the app and mounts the screen matching `location`.
    #[must_use]
    pub fn new(auth_port: Arc<dyn AuthPort>, theme: Theme, location: &str) -> Self {
        let route = Route::resolve(location);
        let screen = match route {
            Some(Route::Login) => CurrentScreen::Login(LoginPage::new(theme)),
            None => {
                warn!(location, "No routes matched location");
                CurrentScreen::Unmatched
            }
        };
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::Running,
            route,
            screen,
            login_use_case: LoginUseCase::new(auth_port),
            next_login_id: 0,
            pending_login: None,
            action_tx,
            action_rx,
        }
    }

    /// Returns the matched route, if any.
    #[must_use]
    pub const fn route(&self) -> Option<Route> {
        self.route
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                event = terminal_events.next() => {
                    match event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.state = AppState::Exiting;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => self.state = AppState::Exiting,
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn render(&self, frame: &mut Frame) {
        match &self.screen {
            CurrentScreen::Login(page) => {
                frame.render_widget(page, frame.area());
            }
            CurrentScreen::Unmatched => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        let CurrentScreen::Login(page) = &mut self.screen else {
            return EventResult::Continue;
        };

        match page.handle_key(key) {
            FormAction::Submit(submission) => {
                self.dispatch_submission(&submission, SubmissionSource::Form);
            }
            FormAction::Blocked { field } => {
                debug!(field = %field, "Required field is empty");
            }
            FormAction::None => {}
        }

        EventResult::Continue
    }

    fn dispatch_submission(&mut self, submission: &Submission, source: SubmissionSource) {
        let request = match LoginRequest::from_submission(submission, source) {
            Ok(request) => request,
            Err(e) => {
                error!(error = %e, "Discarding malformed submission");
                return;
            }
        };

        self.next_login_id += 1;
        let id = self.next_login_id;
        self.pending_login = Some(PendingLogin {
            id,
            submission: submission.clone(),
        });

        let use_case = self.login_use_case.clone();
        let action_tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = use_case.execute(request).await;
            if action_tx.send(Action::LoginFinished { id, result }).is_err() {
                debug!("Application closed before login finished");
            }
        });
    }

    fn handle_action(&mut self, action: Action) {
        let Action::LoginFinished { id, result } = action;
        let pending = self.take_pending_login(id);

        match result {
            Ok(response) => {
                info!(id, source = %response.source, token = %response.token, "Login successful");
                self.reset_form_after(pending.as_ref());
            }
            Err(e) => {
                error!(id, error = %e, recoverable = e.is_recoverable(), "Login failed");
            }
        }
    }

    fn take_pending_login(&mut self, id: u64) -> Option<PendingLogin> {
        if self.pending_login.as_ref().is_some_and(|p| p.id == id) {
            self.pending_login.take()
        } else {
            debug!(id, "Result belongs to an older submission");
            None
        }
    }

    /// Clears the form only if it still shows the submitted values.
    fn reset_form_after(&mut self, pending: Option<&PendingLogin>) {
        let (Some(pending), CurrentScreen::Login(page)) = (pending, &mut self.screen) else {
            return;
        };
        if page.form().collect() == pending.submission {
            page.form_mut().reset();
        } else {
            debug!(id = pending.id, "Form edited since submission, keeping values");
        }
    }
}
