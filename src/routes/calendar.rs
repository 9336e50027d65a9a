use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::header,
    response::{IntoResponse, Response},
};
use luach_recurrence::{
    AnchorInput, EventConfig, GeneratedCalendar, RecurrenceEngine, build_calendar, ics::IcsOptions,
};
use luach_solar::SpaSunset;
use serde::Deserialize;
use time::{Date, OffsetDateTime};
use time_tz::{ToTimezone, timezones};

use crate::{error::AppError, locations::LocationEntry, routes::AppState};

const CALENDAR_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// Request fields shared by the download and subscription endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub is_hebrew: bool,
    pub greg_year: Option<i32>,
    pub greg_month: Option<u8>,
    pub greg_day: Option<u8>,
    #[serde(default)]
    pub after_sunset: bool,
    pub heb_month: Option<u8>,
    pub heb_day: Option<u8>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_create_sunset_event")]
    pub create_sunset_event: bool,
}

fn default_create_sunset_event() -> bool {
    true
}

impl GenerateRequest {
    pub fn anchor_input(&self) -> Result<AnchorInput, AppError> {
        if self.is_hebrew {
            match (self.heb_month, self.heb_day) {
                (Some(month), Some(day)) => Ok(AnchorInput::Hebrew { month, day }),
                _ => Err(AppError::ValidationError(
                    "heb_month and heb_day are required for a Hebrew date".to_string(),
                )),
            }
        } else {
            match (self.greg_year, self.greg_month, self.greg_day) {
                (Some(year), Some(month), Some(day)) => Ok(AnchorInput::Gregorian {
                    year,
                    month,
                    day,
                    after_sunset: self.after_sunset,
                }),
                _ => Err(AppError::ValidationError(
                    "greg_year, greg_month and greg_day are required for a Gregorian date"
                        .to_string(),
                )),
            }
        }
    }
}

/// Civil date at `location` right now, which decides the current Hebrew year.
fn today_at(location: &LocationEntry) -> Date {
    let now = OffsetDateTime::now_utc();
    match timezones::get_by_name(&location.timezone) {
        Some(tz) => now.to_timezone(tz).date(),
        None => now.date(),
    }
}

fn generate_calendar(
    app: &AppState,
    request: &GenerateRequest,
) -> Result<GeneratedCalendar, AppError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::ValidationError("title is required".to_string()));
    }

    let input = request.anchor_input()?;
    let location = app.locations.resolve(&request.location);
    let settings = &app.config.calendar;

    let event_config = EventConfig {
        title: title.to_string(),
        create_sunset_event: request.create_sunset_event,
        location: location.geo(),
        timezone: location.timezone.clone(),
        sunset_title_prefix: settings.sunset_title_prefix.clone(),
        uid_domain: settings.uid_domain.clone(),
    };
    let engine = RecurrenceEngine::new(settings.horizon_years);

    let calendar = build_calendar(
        input,
        today_at(location),
        &event_config,
        &engine,
        &SpaSunset,
    )?;

    Ok(calendar)
}

/// POST /generate - Calendar file download
#[tracing::instrument(skip_all, fields(location = tracing::field::Empty, is_hebrew = tracing::field::Empty))]
pub async fn generate(
    State(app): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|e| AppError::ValidationError(e.body_text()))?;
    record_request(&request);

    let calendar = generate_calendar(&app, &request)?;
    let body = calendar.render(&IcsOptions::download(OffsetDateTime::now_utc()));

    Ok((
        [
            (header::CONTENT_TYPE, CALENDAR_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=events.ics",
            ),
        ],
        body,
    )
        .into_response())
}

/// GET /subscribe - Live feed for calendar clients that poll a URL
#[tracing::instrument(skip_all, fields(location = tracing::field::Empty, is_hebrew = tracing::field::Empty))]
pub async fn subscribe(
    State(app): State<AppState>,
    query: Result<Query<GenerateRequest>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(request) = query.map_err(|e| AppError::ValidationError(e.body_text()))?;
    record_request(&request);

    let calendar = generate_calendar(&app, &request)?;
    let options = IcsOptions::subscription(
        OffsetDateTime::now_utc(),
        app.config.calendar.refresh_interval.clone(),
    );
    let body = calendar.render(&options);

    Ok((
        [
            (header::CONTENT_TYPE, CALENDAR_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, "inline; filename=events.ics"),
        ],
        body,
    )
        .into_response())
}

fn record_request(request: &GenerateRequest) {
    let span = tracing::Span::current();
    span.record("location", request.location.as_str());
    span.record("is_hebrew", request.is_hebrew);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest {
            is_hebrew: false,
            greg_year: Some(2024),
            greg_month: Some(3),
            greg_day: Some(24),
            after_sunset: false,
            heb_month: None,
            heb_day: None,
            location: "Jerusalem".to_string(),
            title: "Test".to_string(),
            create_sunset_event: true,
        }
    }

    #[test]
    fn test_anchor_input_gregorian() {
        assert_eq!(
            request().anchor_input().unwrap(),
            AnchorInput::Gregorian {
                year: 2024,
                month: 3,
                day: 24,
                after_sunset: false
            }
        );
    }

    #[test]
    fn test_anchor_input_requires_fields_for_mode() {
        let mut hebrew = request();
        hebrew.is_hebrew = true;
        assert!(hebrew.anchor_input().is_err());

        hebrew.heb_month = Some(13);
        hebrew.heb_day = Some(14);
        assert_eq!(
            hebrew.anchor_input().unwrap(),
            AnchorInput::Hebrew { month: 13, day: 14 }
        );

        let mut gregorian = request();
        gregorian.greg_day = None;
        assert!(gregorian.anchor_input().is_err());
    }

    #[test]
    fn test_sunset_event_defaults_to_on() {
        let request: GenerateRequest = serde_json::from_str(
            r#"{"is_hebrew": true, "heb_month": 7, "heb_day": 1, "after_sunset": false, "location": "London", "title": "Rosh Hashana"}"#,
        )
        .unwrap();
        assert!(request.create_sunset_event);
    }
}
