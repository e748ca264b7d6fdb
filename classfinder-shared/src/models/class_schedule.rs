/// Weekly availability windows
///
/// A class may have any number of windows. Each window covers the half-open
/// minute range `[from, to)` on one weekday (0 = Sunday ... 6 = Saturday).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE class_schedule (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     class_id UUID NOT NULL REFERENCES classes(id) ON DELETE CASCADE,
///     week_day INTEGER NOT NULL CHECK (week_day BETWEEN 0 AND 6),
///     "from" INTEGER NOT NULL,
///     "to" INTEGER NOT NULL,
///     CHECK ("from" < "to")
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, Postgres, QueryBuilder};
use uuid::Uuid;

/// One stored availability window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ClassSchedule {
    pub id: Uuid,
    pub class_id: Uuid,
    pub week_day: i32,

    /// Start, minutes since midnight (inclusive)
    pub from: i32,

    /// End, minutes since midnight (exclusive)
    pub to: i32,
}

/// A window already converted to minutes, ready to insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    pub week_day: i32,
    pub from: i32,
    pub to: i32,
}

impl ClassSchedule {
    /// Inserts all windows for a class in a single statement
    ///
    /// Returns the stored rows. An empty slice inserts nothing and does not
    /// hit the database.
    pub async fn create_many<'e, E>(
        executor: E,
        class_id: Uuid,
        windows: &[ScheduleWindow],
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        if windows.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(r#"INSERT INTO class_schedule (class_id, week_day, "from", "to") "#);

        builder.push_values(windows, |mut row, window| {
            row.push_bind(class_id)
                .push_bind(window.week_day)
                .push_bind(window.from)
                .push_bind(window.to);
        });
        builder.push(r#" RETURNING id, class_id, week_day, "from", "to""#);

        let rows = builder
            .build_query_as::<ClassSchedule>()
            .fetch_all(executor)
            .await?;

        Ok(rows)
    }

    /// Lists the windows of a class ordered by weekday and start time
    pub async fn list_for_class<'e, E>(executor: E, class_id: Uuid) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, ClassSchedule>(
            r#"
            SELECT id, class_id, week_day, "from", "to"
            FROM class_schedule
            WHERE class_id = $1
            ORDER BY week_day, "from"
            "#,
        )
        .bind(class_id)
        .fetch_all(executor)
        .await
    }
}
