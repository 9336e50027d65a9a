//! Hebrew-calendar recurrence: resolves an anchor date, projects it over a
//! horizon of Hebrew years and turns each year into calendar events.
//!
//! ```text
//! AnchorInput -> resolve -> RecurrenceAnchor -> RecurrenceEngine -> ScannedYear*
//!             -> Materializer -> OccurrencePair* -> ics::render
//! ```

mod anchor;
mod engine;
mod error;
mod id;
pub mod ics;
mod materialize;
pub mod pipeline;

pub use anchor::{AnchorInput, MonthPolicy, RecurrenceAnchor, resolve};
pub use engine::{
    CandidateOccurrence, DEFAULT_HORIZON_YEARS, GenerationReport, RecurrenceEngine, ScannedYear,
    resolve_year,
};
pub use error::{RecurrenceError, SkipReason};
pub use id::{DEFAULT_UID_DOMAIN, EventKind, stable_id, title_digest};
pub use materialize::{
    AllDayEvent, DEFAULT_SUNSET_TITLE_PREFIX, EventConfig, Materializer, OccurrencePair,
    SUNSET_EVENT_MINUTES, SunsetEvent,
};
pub use pipeline::{GeneratedCalendar, build_calendar};
