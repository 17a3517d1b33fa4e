pub mod command;
pub mod editor_session;

pub use command::Command;
pub use editor_session::EditorSession;
