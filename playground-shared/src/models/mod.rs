pub mod preferences;
pub mod remote;
pub mod session;

pub use preferences::{Theme, UiPreferences};
pub use remote::{Comment, NewTodo, Post, Todo, TodoPatch, User};
pub use session::{Session, SessionStatus, SessionUser};
