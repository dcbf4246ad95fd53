use eyre::{Result, eyre};
use sqlx::{Pool, Postgres};

use crate::models::{DbClassTimetableRow, DbTeacherTimetableRow, DbTimetableEntry};
use schoolsync_core::schedule::time::minute_key;

/// Every entry for the class, with subject and teacher names resolved at
/// fetch time. The grid resolver re-sorts; the ordering here is only for
/// readable raw listings.
pub async fn list_for_class(
    pool: &Pool<Postgres>,
    class_id: i32,
) -> Result<Vec<DbClassTimetableRow>> {
    let rows = sqlx::query_as::<_, DbClassTimetableRow>(
        r#"
        SELECT t.*,
               sub.subject_name,
               te.first_name AS teacher_first_name,
               te.last_name AS teacher_last_name
        FROM timetable t
        LEFT JOIN subjects sub ON sub.subject_id = t.subject_id
        LEFT JOIN teachers te ON te.teacher_id = t.teacher_id
        WHERE t.class_id = $1
        ORDER BY t.day_of_week, t.start_time
        "#,
    )
    .bind(class_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// The symmetric fetch for the teacher perspective, resolving the class
/// name instead of the teacher name.
pub async fn list_for_teacher(
    pool: &Pool<Postgres>,
    teacher_id: i32,
) -> Result<Vec<DbTeacherTimetableRow>> {
    let rows = sqlx::query_as::<_, DbTeacherTimetableRow>(
        r#"
        SELECT t.*,
               sub.subject_name,
               c.class_name
        FROM timetable t
        LEFT JOIN subjects sub ON sub.subject_id = t.subject_id
        LEFT JOIN classes c ON c.class_id = t.class_id
        WHERE t.teacher_id = $1
        ORDER BY t.day_of_week, t.start_time
        "#,
    )
    .bind(teacher_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Inserts or updates the entry at the natural key
/// `(class_id, day_of_week, start_time)`.
///
/// Times are normalized to minute precision before keying, so "09:00:00"
/// and "09:00" address the same row. The conflict target is the UNIQUE
/// constraint from the schema: an update preserves the row's surrogate
/// `timetable_id`, and two concurrent saves of the same key cannot leave
/// two rows behind.
pub async fn upsert_entry(
    pool: &Pool<Postgres>,
    class_id: i32,
    day_of_week: &str,
    start_time: &str,
    end_time: &str,
    subject_id: i32,
    teacher_id: i32,
) -> Result<DbTimetableEntry> {
    let start = minute_key(start_time).ok_or_else(|| eyre!("Invalid start time: {start_time}"))?;
    let end = minute_key(end_time).ok_or_else(|| eyre!("Invalid end time: {end_time}"))?;

    tracing::debug!(
        "Upserting timetable entry: class_id={}, day={}, start={}",
        class_id,
        day_of_week,
        start
    );

    let entry = sqlx::query_as::<_, DbTimetableEntry>(
        r#"
        INSERT INTO timetable (class_id, day_of_week, start_time, end_time, subject_id, teacher_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (class_id, day_of_week, start_time)
        DO UPDATE SET subject_id = EXCLUDED.subject_id,
                      teacher_id = EXCLUDED.teacher_id,
                      end_time = EXCLUDED.end_time,
                      updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(class_id)
    .bind(day_of_week)
    .bind(start)
    .bind(end)
    .bind(subject_id)
    .bind(teacher_id)
    .fetch_one(pool)
    .await?;

    Ok(entry)
}

pub async fn delete_entry(pool: &Pool<Postgres>, timetable_id: i32) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM timetable
        WHERE timetable_id = $1
        "#,
    )
    .bind(timetable_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
