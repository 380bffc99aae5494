pub mod manager;
pub mod models;
pub mod users;

pub use manager::DatabaseError;
pub use models::User;
pub use users::{MemoryUserStore, PgUserStore, UserStore};
