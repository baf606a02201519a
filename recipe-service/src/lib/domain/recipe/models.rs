use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::recipe::errors::RecipeIdError;
use crate::recipe::errors::RecipeNameError;

/// Recipe aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: RecipeName,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub published_at: DateTime<Utc>,
}

impl Recipe {
    /// Build a new recipe from a create command, assigning its id and
    /// publication time.
    pub fn publish(command: CreateRecipeCommand, published_at: DateTime<Utc>) -> Self {
        Self {
            id: RecipeId::new(),
            name: command.name,
            tags: command.tags,
            ingredients: command.ingredients,
            instructions: command.instructions,
            published_at,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Apply the fields present in `command`; the others are left untouched.
    pub fn apply(&mut self, command: UpdateRecipeCommand) {
        if let Some(name) = command.name {
            self.name = name;
        }
        if let Some(tags) = command.tags {
            self.tags = tags;
        }
        if let Some(ingredients) = command.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(instructions) = command.instructions {
            self.instructions = instructions;
        }
    }
}

/// Recipe unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecipeId(pub Uuid);

impl RecipeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a recipe ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, RecipeIdError> {
        Uuid::parse_str(s)
            .map(RecipeId)
            .map_err(|e| RecipeIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Recipe name value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeName(String);

impl RecipeName {
    const MAX_LENGTH: usize = 200;

    /// # Errors
    /// * `Empty` - Name is empty or whitespace
    /// * `TooLong` - Name exceeds 200 characters
    pub fn new(name: String) -> Result<Self, RecipeNameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RecipeNameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(RecipeNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a recipe. Id and publication time are assigned by the service.
#[derive(Debug, Clone)]
pub struct CreateRecipeCommand {
    pub name: RecipeName,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Command to update an existing recipe.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeCommand {
    pub name: Option<RecipeName>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pasta() -> Recipe {
        Recipe::publish(
            CreateRecipeCommand {
                name: RecipeName::new("Pasta".to_string()).unwrap(),
                tags: vec!["italian".to_string()],
                ingredients: vec!["pasta".to_string(), "water".to_string()],
                instructions: vec!["boil".to_string()],
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_recipe_name_validation() {
        assert_eq!(RecipeName::new("".to_string()), Err(RecipeNameError::Empty));
        assert_eq!(RecipeName::new("   ".to_string()), Err(RecipeNameError::Empty));
        assert_eq!(
            RecipeName::new(" Pasta ".to_string()).unwrap().as_str(),
            "Pasta"
        );
        assert!(matches!(
            RecipeName::new("x".repeat(201)),
            Err(RecipeNameError::TooLong { max: 200, actual: 201 })
        ));
    }

    #[test]
    fn test_recipe_id_from_string() {
        let id = RecipeId::new();
        assert_eq!(RecipeId::from_string(&id.to_string()), Ok(id));
        assert!(RecipeId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_has_tag_is_exact() {
        let recipe = pasta();
        assert!(recipe.has_tag("italian"));
        assert!(!recipe.has_tag("Italian"));
        assert!(!recipe.has_tag("ital"));
    }

    #[test]
    fn test_apply_partial_update() {
        let mut recipe = pasta();
        let original = recipe.clone();

        recipe.apply(UpdateRecipeCommand {
            tags: Some(vec!["quick".to_string()]),
            ..Default::default()
        });

        assert_eq!(recipe.tags, vec!["quick".to_string()]);
        assert_eq!(recipe.name, original.name);
        assert_eq!(recipe.ingredients, original.ingredients);
        assert_eq!(recipe.instructions, original.instructions);
        assert_eq!(recipe.id, original.id);
        assert_eq!(recipe.published_at, original.published_at);
    }
}
