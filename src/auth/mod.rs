pub mod session;
pub mod token;

pub use session::{SessionContext, SessionData, SessionStore};
