pub mod credential;
pub mod recipe;
