// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Every route here is mounted behind `jwt_auth_middleware`, which places an
// `AuthUser` in the request extensions.

pub mod auth;
pub mod career;

pub use auth::whoami_get;
pub use career::career_get;
