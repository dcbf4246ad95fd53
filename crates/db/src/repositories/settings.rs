use eyre::Result;
use sqlx::{Pool, Postgres};

use crate::models::DbSetting;

pub async fn list_settings(pool: &Pool<Postgres>) -> Result<Vec<DbSetting>> {
    let settings = sqlx::query_as::<_, DbSetting>(
        r#"
        SELECT key, value
        FROM settings
        ORDER BY key ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(settings)
}

pub async fn upsert_setting(pool: &Pool<Postgres>, key: &str, value: &str) -> Result<DbSetting> {
    let setting = sqlx::query_as::<_, DbSetting>(
        r#"
        INSERT INTO settings (key, value)
        VALUES ($1, $2)
        ON CONFLICT (key)
        DO UPDATE SET value = EXCLUDED.value
        RETURNING key, value
        "#,
    )
    .bind(key)
    .bind(value)
    .fetch_one(pool)
    .await?;

    Ok(setting)
}
