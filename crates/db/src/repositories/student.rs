use eyre::{Result, eyre};
use sqlx::{Pool, Postgres};

use crate::models::{DbStudent, DbStudentWithClass};
use schoolsync_core::models::student::{CreateStudentRequest, UpdateStudentRequest};

pub async fn list_students(pool: &Pool<Postgres>) -> Result<Vec<DbStudentWithClass>> {
    let students = sqlx::query_as::<_, DbStudentWithClass>(
        r#"
        SELECT s.*, c.class_name, c.year_level
        FROM students s
        LEFT JOIN classes c ON c.class_id = s.class_id
        ORDER BY s.student_id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(students)
}

pub async fn get_student_by_id(
    pool: &Pool<Postgres>,
    student_id: i32,
) -> Result<Option<DbStudentWithClass>> {
    let student = sqlx::query_as::<_, DbStudentWithClass>(
        r#"
        SELECT s.*, c.class_name, c.year_level
        FROM students s
        LEFT JOIN classes c ON c.class_id = s.class_id
        WHERE s.student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_optional(pool)
    .await?;

    Ok(student)
}

pub async fn create_student(
    pool: &Pool<Postgres>,
    request: &CreateStudentRequest,
) -> Result<DbStudent> {
    tracing::debug!(
        "Creating student: {} {}",
        request.first_name,
        request.last_name
    );

    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        INSERT INTO students (
            first_name, last_name, email, phone_number, date_of_birth,
            gender, address, guardian_name, guardian_contact, class_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.email)
    .bind(&request.phone_number)
    .bind(request.date_of_birth)
    .bind(&request.gender)
    .bind(&request.address)
    .bind(&request.guardian_name)
    .bind(&request.guardian_contact)
    .bind(request.class_id)
    .fetch_one(pool)
    .await?;

    Ok(student)
}

pub async fn update_student(
    pool: &Pool<Postgres>,
    student_id: i32,
    request: &UpdateStudentRequest,
) -> Result<DbStudent> {
    let existing = get_student_by_id(pool, student_id)
        .await?
        .ok_or_else(|| eyre!("Student not found"))?
        .student;

    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        UPDATE students
        SET first_name = $2, last_name = $3, email = $4, phone_number = $5,
            date_of_birth = $6, gender = $7, address = $8,
            guardian_name = $9, guardian_contact = $10, class_id = $11,
            updated_at = NOW()
        WHERE student_id = $1
        RETURNING *
        "#,
    )
    .bind(student_id)
    .bind(request.first_name.as_deref().unwrap_or(&existing.first_name))
    .bind(request.last_name.as_deref().unwrap_or(&existing.last_name))
    .bind(request.email.clone().or(existing.email))
    .bind(request.phone_number.clone().or(existing.phone_number))
    .bind(request.date_of_birth.or(existing.date_of_birth))
    .bind(request.gender.clone().or(existing.gender))
    .bind(request.address.clone().or(existing.address))
    .bind(request.guardian_name.clone().or(existing.guardian_name))
    .bind(request.guardian_contact.clone().or(existing.guardian_contact))
    .bind(request.class_id.or(existing.class_id))
    .fetch_one(pool)
    .await?;

    Ok(student)
}

pub async fn delete_student(pool: &Pool<Postgres>, student_id: i32) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM students
        WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
