use eyre::{Result, eyre};
use sqlx::{Pool, Postgres};

use crate::models::DbTeacher;
use schoolsync_core::models::teacher::{CreateTeacherRequest, UpdateTeacherRequest};

pub async fn list_teachers(pool: &Pool<Postgres>) -> Result<Vec<DbTeacher>> {
    let teachers = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT *
        FROM teachers
        ORDER BY teacher_id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(teachers)
}

pub async fn get_teacher_by_id(
    pool: &Pool<Postgres>,
    teacher_id: i32,
) -> Result<Option<DbTeacher>> {
    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT *
        FROM teachers
        WHERE teacher_id = $1
        "#,
    )
    .bind(teacher_id)
    .fetch_optional(pool)
    .await?;

    Ok(teacher)
}

pub async fn create_teacher(
    pool: &Pool<Postgres>,
    request: &CreateTeacherRequest,
) -> Result<DbTeacher> {
    tracing::debug!(
        "Creating teacher: {} {}",
        request.first_name,
        request.last_name
    );

    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        INSERT INTO teachers (
            first_name, last_name, email, phone_number, department, qualification
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.email)
    .bind(&request.phone_number)
    .bind(&request.department)
    .bind(&request.qualification)
    .fetch_one(pool)
    .await?;

    Ok(teacher)
}

pub async fn update_teacher(
    pool: &Pool<Postgres>,
    teacher_id: i32,
    request: &UpdateTeacherRequest,
) -> Result<DbTeacher> {
    let existing = get_teacher_by_id(pool, teacher_id)
        .await?
        .ok_or_else(|| eyre!("Teacher not found"))?;

    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        UPDATE teachers
        SET first_name = $2, last_name = $3, email = $4, phone_number = $5,
            department = $6, qualification = $7, updated_at = NOW()
        WHERE teacher_id = $1
        RETURNING *
        "#,
    )
    .bind(teacher_id)
    .bind(request.first_name.as_deref().unwrap_or(&existing.first_name))
    .bind(request.last_name.as_deref().unwrap_or(&existing.last_name))
    .bind(request.email.clone().or(existing.email))
    .bind(request.phone_number.clone().or(existing.phone_number))
    .bind(request.department.clone().or(existing.department))
    .bind(request.qualification.clone().or(existing.qualification))
    .fetch_one(pool)
    .await?;

    Ok(teacher)
}

pub async fn delete_teacher(pool: &Pool<Postgres>, teacher_id: i32) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM teachers
        WHERE teacher_id = $1
        "#,
    )
    .bind(teacher_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
