use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::recipe::errors::RecipeError;
use crate::recipe::models::Recipe;
use crate::recipe::models::RecipeId;
use crate::recipe::models::RecipeName;
use crate::recipe::ports::RecipeRepository;

/// Recipe store. Tags, ingredients and instructions are `TEXT[]` columns.
pub struct PostgresRecipeRepository {
    pool: PgPool,
}

impl PostgresRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_recipe(row: &PgRow) -> Result<Recipe, RecipeError> {
        Ok(Recipe {
            id: RecipeId(row.try_get("id").map_err(database_error)?),
            name: RecipeName::new(row.try_get("name").map_err(database_error)?)?,
            tags: row.try_get("tags").map_err(database_error)?,
            ingredients: row.try_get("ingredients").map_err(database_error)?,
            instructions: row.try_get("instructions").map_err(database_error)?,
            published_at: row.try_get("published_at").map_err(database_error)?,
        })
    }
}

#[async_trait]
impl RecipeRepository for PostgresRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, RecipeError> {
        sqlx::query(
            r#"
            INSERT INTO recipes (id, name, tags, ingredients, instructions, published_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(recipe.id.0)
        .bind(recipe.name.as_str())
        .bind(&recipe.tags)
        .bind(&recipe.ingredients)
        .bind(&recipe.instructions)
        .bind(recipe.published_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(recipe)
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, RecipeError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, tags, ingredients, instructions, published_at
            FROM recipes
            ORDER BY published_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_recipe).collect()
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, tags, ingredients, instructions, published_at
            FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_recipe).transpose()
    }

    async fn update(&self, recipe: Recipe) -> Result<Recipe, RecipeError> {
        let result = sqlx::query(
            r#"
            UPDATE recipes
            SET name = $2, tags = $3, ingredients = $4, instructions = $5
            WHERE id = $1
            "#,
        )
        .bind(recipe.id.0)
        .bind(recipe.name.as_str())
        .bind(&recipe.tags)
        .bind(&recipe.ingredients)
        .bind(&recipe.instructions)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RecipeError::NotFound(recipe.id));
        }

        Ok(recipe)
    }

    async fn delete(&self, id: &RecipeId) -> Result<(), RecipeError> {
        let result = sqlx::query(
            r#"
            DELETE FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RecipeError::NotFound(*id));
        }

        Ok(())
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, RecipeError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, tags, ingredients, instructions, published_at
            FROM recipes
            WHERE $1 = ANY(tags)
            ORDER BY published_at ASC
            "#,
        )
        .bind(tag)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_recipe).collect()
    }
}

fn database_error(e: sqlx::Error) -> RecipeError {
    RecipeError::DatabaseError(e.to_string())
}
