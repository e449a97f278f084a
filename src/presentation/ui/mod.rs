//! UI screens.

mod app;
mod login_form;
mod login_page;

pub use app::App;
pub use login_form::{FormAction, LoginForm};
pub use login_page::{LoginPage, container_width};
