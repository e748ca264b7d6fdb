/// Class endpoints
///
/// - `GET /classes?subject=<string>&week_day=<0-6>&time=<HH:MM>` - Search classes
/// - `POST /classes` - Register a tutor, a class and its weekly schedule

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use classfinder_shared::classes::{ClassFilters, ClassRegistration, ClassWithTutor};
use serde::Deserialize;

/// Raw search query parameters
///
/// Every field is optional here so an absent filter is reported as
/// `Missing filters to search classes` rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SearchClassesQuery {
    pub subject: Option<String>,
    pub week_day: Option<String>,
    pub time: Option<String>,
}

/// Search classes
///
/// # Endpoint
///
/// ```text
/// GET /classes?subject=Math&week_day=1&time=09:00
/// ```
///
/// # Response
///
/// ```json
/// [
///   {
///     "class": { "id": "uuid", "user_id": "uuid", "subject": "Math", "cost": 50.0, "created_at": "..." },
///     "tutor": { "id": "uuid", "name": "Ana", "avatar": "...", "whatsapp": "...", "bio": "...", "created_at": "..." }
///   }
/// ]
/// ```
///
/// # Errors
///
/// A weekday or time that no schedule can match (e.g. `week_day=9`,
/// `time=9am`) answers `200` with an empty array.
///
/// - `400 Bad Request`: a filter is missing or blank
/// - `500 Internal Server Error`: storage failure
pub async fn search_classes(
    State(state): State<AppState>,
    Query(query): Query<SearchClassesQuery>,
) -> ApiResult<Json<Vec<ClassWithTutor>>> {
    let Some(filters) = ClassFilters::parse(
        query.subject.as_deref(),
        query.week_day.as_deref(),
        query.time.as_deref(),
    )?
    else {
        return Ok(Json(Vec::new()));
    };

    let classes = state.class_query.search(&filters).await?;

    Ok(Json(classes))
}

/// Register a class
///
/// # Endpoint
///
/// ```text
/// POST /classes
/// Content-Type: application/json
///
/// {
///   "name": "Ana",
///   "avatar": "https://example.com/ana.png",
///   "whatsapp": "5511999999999",
///   "bio": "Math tutor",
///   "subject": "Math",
///   "cost": 50,
///   "schedule": [{ "week_day": 1, "from": "08:00", "to": "10:00" }]
/// }
/// ```
///
/// # Response
///
/// `201 Created` with an empty body.
///
/// # Errors
///
/// `400 Bad Request` with `Unexpected error while creating new class` for any
/// failure: unreadable body, validation, or storage. The cause is logged.
pub async fn create_class(
    State(state): State<AppState>,
    payload: Result<Json<ClassRegistration>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(registration) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection, "Unreadable class registration body");
        ApiError::RegistrationFailed
    })?;

    state
        .class_registration
        .register(registration)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Class registration failed");
            ApiError::RegistrationFailed
        })?;

    Ok(StatusCode::CREATED)
}
