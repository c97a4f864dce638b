//! Presentation layer with the terminal app, record panels and widgets.

/// Global key bindings.
pub mod events;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
