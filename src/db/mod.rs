pub mod connection;
pub mod sessions;

pub use connection::{init_db, Database};
