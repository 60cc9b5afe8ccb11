// handlers/public/auth/mod.rs - Public authentication handlers
//
// Token acquisition endpoints that do not require authentication.

pub mod login;
pub mod register;

pub use login::login_post;
pub use register::register_post;
