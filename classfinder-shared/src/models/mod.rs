/// Database models for Classfinder
///
/// # Models
///
/// - `user`: Tutors offering classes
/// - `class`: A subject offering owned by exactly one tutor
/// - `class_schedule`: Weekly availability windows belonging to a class
///
/// Write operations are generic over `sqlx::PgExecutor`, so the same call
/// works against the pool or inside an open transaction:
///
/// ```no_run
/// use classfinder_shared::models::user::{CreateUser, User};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let mut tx = pool.begin().await?;
///
/// let tutor = User::create(
///     &mut *tx,
///     CreateUser {
///         name: "Ana".to_string(),
///         avatar: "https://example.com/ana.png".to_string(),
///         whatsapp: "5511999999999".to_string(),
///         bio: "Math tutor".to_string(),
///     },
/// )
/// .await?;
///
/// tx.commit().await?;
/// # Ok(())
/// # }
/// ```

pub mod class;
pub mod class_schedule;
pub mod user;
