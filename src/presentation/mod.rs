//! Presentation layer with UI components and event handling.

/// Event handling.
pub mod events;
/// Route table.
pub mod routes;
/// Color theme.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use routes::Route;
pub use theme::Theme;
pub use ui::App;
