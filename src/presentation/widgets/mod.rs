mod confirm_dialog;
mod input;
mod record_table;
mod select;
mod status_bar;
mod tab_bar;

pub use confirm_dialog::ConfirmDialog;
pub use input::TextInput;
pub use record_table::{RecordTable, TableRow};
pub use select::{SelectInput, SelectOption};
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
