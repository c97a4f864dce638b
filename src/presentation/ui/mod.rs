//! UI screens.

mod app;
mod form_field;
mod panels;
mod record_panel;

pub use app::App;
pub use form_field::FormField;
pub use panels::{EMPLOYEE_SELECT, PROJECT_SELECT};
pub use record_panel::{PanelAction, PanelFocus, PanelRecord, RecordPanel};
