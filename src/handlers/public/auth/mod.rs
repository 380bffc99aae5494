// handlers/public/auth/mod.rs - Account creation and token acquisition

use serde::Deserialize;

pub mod login;    // POST /api/login - verify credentials and issue a JWT
pub mod register; // POST /api/register - create a new account

pub use login::login_post;
pub use register::register_post;

/// Request body shared by both endpoints.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
