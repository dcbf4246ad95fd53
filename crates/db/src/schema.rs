use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create classes table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classes (
            class_id SERIAL PRIMARY KEY,
            class_name VARCHAR(255) NOT NULL,
            year_level INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create students table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            student_id SERIAL PRIMARY KEY,
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) UNIQUE,
            phone_number VARCHAR(50),
            date_of_birth DATE,
            gender VARCHAR(50),
            address TEXT,
            guardian_name VARCHAR(255),
            guardian_contact VARCHAR(50),
            class_id INTEGER REFERENCES classes(class_id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create teachers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            teacher_id SERIAL PRIMARY KEY,
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) UNIQUE,
            phone_number VARCHAR(50),
            department VARCHAR(255),
            qualification VARCHAR(255),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create subjects table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS subjects (
            subject_id SERIAL PRIMARY KEY,
            subject_name VARCHAR(255) NOT NULL,
            subject_code VARCHAR(50) UNIQUE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create settings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            key VARCHAR(255) PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create timetable table. Times are stored as minute-precision
    // "HH:MM" strings; the repository normalizes inputs before keying.
    // The natural key (class_id, day_of_week, start_time) is enforced
    // here so the upsert can target it with ON CONFLICT instead of a
    // racy lookup-then-branch.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS timetable (
            timetable_id SERIAL PRIMARY KEY,
            class_id INTEGER NOT NULL REFERENCES classes(class_id),
            day_of_week VARCHAR(20) NOT NULL,
            start_time VARCHAR(5) NOT NULL,
            end_time VARCHAR(5) NOT NULL,
            subject_id INTEGER NOT NULL REFERENCES subjects(subject_id),
            teacher_id INTEGER NOT NULL REFERENCES teachers(teacher_id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT timetable_natural_key UNIQUE (class_id, day_of_week, start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_students_class_id ON students(class_id);
        CREATE INDEX IF NOT EXISTS idx_timetable_class_id ON timetable(class_id);
        CREATE INDEX IF NOT EXISTS idx_timetable_teacher_id ON timetable(teacher_id);
        CREATE INDEX IF NOT EXISTS idx_timetable_subject_id ON timetable(subject_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
