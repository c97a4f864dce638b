//! Application services.

/// Edit target tracking.
pub mod edit_session;
/// Per-panel notices.
pub mod notice_board;

pub use edit_session::EditSession;
pub use notice_board::NoticeBoard;
