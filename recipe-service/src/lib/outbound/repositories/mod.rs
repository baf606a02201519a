pub mod credential;
pub mod recipe;

pub use credential::PostgresCredentialRepository;
pub use recipe::PostgresRecipeRepository;
