pub mod argon2;
pub mod errors;
pub mod legacy;

pub use argon2::PasswordHasher;
pub use argon2::PasswordScheme;
pub use errors::PasswordError;
