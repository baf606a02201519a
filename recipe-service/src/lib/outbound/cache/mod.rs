pub mod messages;
pub mod recipe;

pub use recipe::DisabledRecipeCache;
pub use recipe::RedisRecipeCache;
