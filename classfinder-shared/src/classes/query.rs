/// Class search
///
/// A class matches when its subject equals the requested one and at least one
/// of its schedule windows sits on the requested weekday with
/// `from <= time < to`. Each match comes back paired with its tutor.
///
/// # Example
///
/// ```no_run
/// use classfinder_shared::classes::{ClassFilters, ClassQueryService};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let service = ClassQueryService::new(pool);
///
/// if let Some(filters) = ClassFilters::parse(Some("Math"), Some("1"), Some("09:00"))? {
///     for found in service.search(&filters).await? {
///         println!("{} by {}", found.class.subject, found.tutor.name);
///     }
/// }
/// # Ok(())
/// # }
/// ```

use super::ClassError;
use crate::models::{class::Class, user::User};
use crate::time::convert_hours_to_minutes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

/// Validated search filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFilters {
    /// Exact subject to match
    pub subject: String,

    /// 0 = Sunday ... 6 = Saturday
    pub week_day: i32,

    /// Point in time, minutes since midnight
    pub time_in_minutes: i32,
}

impl ClassFilters {
    /// Builds filters from raw query parameters
    ///
    /// Returns `Ok(None)` when every parameter is present but no schedule row
    /// could ever match: a `week_day` that is not an integer in 0-6 or a
    /// `time` that is not a valid `HH:MM`. Such a search has no results and
    /// needs no storage round trip.
    ///
    /// # Errors
    ///
    /// `ClassError::MissingFilters` if any parameter is absent or blank.
    pub fn parse(
        subject: Option<&str>,
        week_day: Option<&str>,
        time: Option<&str>,
    ) -> Result<Option<Self>, ClassError> {
        let (Some(subject), Some(week_day), Some(time)) =
            (non_blank(subject), non_blank(week_day), non_blank(time))
        else {
            return Err(ClassError::MissingFilters);
        };

        let week_day = match week_day.trim().parse::<i32>() {
            Ok(day) if (0..=6).contains(&day) => day,
            _ => {
                debug!(week_day, "Search weekday cannot match any schedule");
                return Ok(None);
            }
        };

        let time_in_minutes = match convert_hours_to_minutes(time) {
            Ok(minutes) => minutes,
            Err(e) => {
                debug!(error = %e, "Search time cannot match any schedule");
                return Ok(None);
            }
        };

        Ok(Some(Self {
            subject: subject.to_string(),
            week_day,
            time_in_minutes,
        }))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A matching class together with the tutor who offers it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassWithTutor {
    pub class: Class,
    pub tutor: User,
}

#[derive(sqlx::FromRow)]
struct ClassSearchRow {
    class_id: Uuid,
    user_id: Uuid,
    subject: String,
    cost: f64,
    class_created_at: DateTime<Utc>,
    name: String,
    avatar: String,
    whatsapp: String,
    bio: String,
    user_created_at: DateTime<Utc>,
}

impl From<ClassSearchRow> for ClassWithTutor {
    fn from(row: ClassSearchRow) -> Self {
        Self {
            class: Class {
                id: row.class_id,
                user_id: row.user_id,
                subject: row.subject,
                cost: row.cost,
                created_at: row.class_created_at,
            },
            tutor: User {
                id: row.user_id,
                name: row.name,
                avatar: row.avatar,
                whatsapp: row.whatsapp,
                bio: row.bio,
                created_at: row.user_created_at,
            },
        }
    }
}

/// Read-only search over classes
#[derive(Debug, Clone)]
pub struct ClassQueryService {
    pool: PgPool,
}

impl ClassQueryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every class matching `filters`, in no particular order
    ///
    /// # Errors
    ///
    /// Storage failures come back as `ClassError::Database`.
    pub async fn search(&self, filters: &ClassFilters) -> Result<Vec<ClassWithTutor>, ClassError> {
        let rows = sqlx::query_as::<_, ClassSearchRow>(
            r#"
            SELECT classes.id AS class_id,
                   classes.user_id,
                   classes.subject,
                   classes.cost,
                   classes.created_at AS class_created_at,
                   users.name,
                   users.avatar,
                   users.whatsapp,
                   users.bio,
                   users.created_at AS user_created_at
            FROM classes
            JOIN users ON users.id = classes.user_id
            WHERE classes.subject = $1
              AND EXISTS (
                  SELECT 1
                  FROM class_schedule
                  WHERE class_schedule.class_id = classes.id
                    AND class_schedule.week_day = $2
                    AND class_schedule."from" <= $3
                    AND class_schedule."to" > $3
              )
            "#,
        )
        .bind(&filters.subject)
        .bind(filters.week_day)
        .bind(filters.time_in_minutes)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            subject = %filters.subject,
            week_day = filters.week_day,
            time_in_minutes = filters.time_in_minutes,
            matches = rows.len(),
            "Class search completed"
        );

        Ok(rows.into_iter().map(ClassWithTutor::from).collect())
    }
}
