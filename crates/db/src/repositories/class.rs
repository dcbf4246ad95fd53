use eyre::{Result, eyre};
use sqlx::{Pool, Postgres};

use crate::models::{DbClass, DbClassWithCount};
use schoolsync_core::models::class::{CreateClassRequest, UpdateClassRequest};

/// Lists classes with their enrolled-student counts in one grouped join,
/// instead of issuing a count query per class.
pub async fn list_classes(pool: &Pool<Postgres>) -> Result<Vec<DbClassWithCount>> {
    let classes = sqlx::query_as::<_, DbClassWithCount>(
        r#"
        SELECT c.*, COUNT(s.student_id) AS student_count
        FROM classes c
        LEFT JOIN students s ON s.class_id = c.class_id
        GROUP BY c.class_id
        ORDER BY c.class_id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(classes)
}

pub async fn get_class_by_id(pool: &Pool<Postgres>, class_id: i32) -> Result<Option<DbClass>> {
    let class = sqlx::query_as::<_, DbClass>(
        r#"
        SELECT *
        FROM classes
        WHERE class_id = $1
        "#,
    )
    .bind(class_id)
    .fetch_optional(pool)
    .await?;

    Ok(class)
}

pub async fn create_class(pool: &Pool<Postgres>, request: &CreateClassRequest) -> Result<DbClass> {
    tracing::debug!(
        "Creating class: {} (year {})",
        request.class_name,
        request.year_level
    );

    let class = sqlx::query_as::<_, DbClass>(
        r#"
        INSERT INTO classes (class_name, year_level)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(&request.class_name)
    .bind(request.year_level)
    .fetch_one(pool)
    .await?;

    Ok(class)
}

pub async fn update_class(
    pool: &Pool<Postgres>,
    class_id: i32,
    request: &UpdateClassRequest,
) -> Result<DbClass> {
    let existing = get_class_by_id(pool, class_id)
        .await?
        .ok_or_else(|| eyre!("Class not found"))?;

    let class = sqlx::query_as::<_, DbClass>(
        r#"
        UPDATE classes
        SET class_name = $2, year_level = $3
        WHERE class_id = $1
        RETURNING *
        "#,
    )
    .bind(class_id)
    .bind(request.class_name.as_deref().unwrap_or(&existing.class_name))
    .bind(request.year_level.unwrap_or(existing.year_level))
    .fetch_one(pool)
    .await?;

    Ok(class)
}

pub async fn delete_class(pool: &Pool<Postgres>, class_id: i32) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM classes
        WHERE class_id = $1
        "#,
    )
    .bind(class_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
