use eyre::Result;
use sqlx::{Pool, Postgres};

use crate::models::DbSubject;
use schoolsync_core::models::subject::CreateSubjectRequest;

pub async fn list_subjects(pool: &Pool<Postgres>) -> Result<Vec<DbSubject>> {
    let subjects = sqlx::query_as::<_, DbSubject>(
        r#"
        SELECT *
        FROM subjects
        ORDER BY subject_name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(subjects)
}

pub async fn create_subject(
    pool: &Pool<Postgres>,
    request: &CreateSubjectRequest,
) -> Result<DbSubject> {
    let subject = sqlx::query_as::<_, DbSubject>(
        r#"
        INSERT INTO subjects (subject_name, subject_code)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(&request.subject_name)
    .bind(&request.subject_code)
    .fetch_one(pool)
    .await?;

    Ok(subject)
}

pub async fn delete_subject(pool: &Pool<Postgres>, subject_id: i32) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM subjects
        WHERE subject_id = $1
        "#,
    )
    .bind(subject_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
