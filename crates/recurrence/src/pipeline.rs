//! Resolver, engine and materializer wired together for one request.

use luach_solar::SunsetProvider;
use time::Date;

use crate::{
    AnchorInput, EventConfig, GenerationReport, Materializer, OccurrencePair, RecurrenceAnchor,
    RecurrenceEngine, RecurrenceError, resolve,
};

/// Output of one generation run, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCalendar {
    /// Calendar display name (the event title).
    pub name: String,
    pub anchor: RecurrenceAnchor,
    pub occurrences: Vec<OccurrencePair>,
    pub report: GenerationReport,
}

impl GeneratedCalendar {
    pub fn render(&self, options: &crate::ics::IcsOptions) -> String {
        crate::ics::render(self, options)
    }
}

/// Only anchor resolution can fail the request. Years without a date and
/// failed sunset queries are skipped and show up in the report.
pub fn build_calendar<P: SunsetProvider>(
    input: AnchorInput,
    today: Date,
    config: &EventConfig,
    engine: &RecurrenceEngine,
    provider: &P,
) -> Result<GeneratedCalendar, RecurrenceError> {
    let anchor = resolve(input, today)?;
    let scan = engine.generate(&anchor);
    let report = GenerationReport::from_scan(&scan);

    let materializer = Materializer::new(config, provider);
    let occurrences: Vec<OccurrencePair> = scan
        .iter()
        .filter_map(|year| year.candidate())
        .map(|candidate| materializer.materialize(candidate))
        .collect();

    let sunsets = occurrences.iter().filter(|o| o.sunset.is_some()).count();

    tracing::info!(
        start_hebrew_year = anchor.start_hebrew_year,
        target_day = anchor.target_day,
        month_policy = ?anchor.month_policy,
        scanned = report.scanned,
        valid = report.valid,
        rolled_over = report.rolled_over,
        skipped = ?report.skipped,
        sunsets,
        "calendar generated"
    );

    Ok(GeneratedCalendar {
        name: config.title.clone(),
        anchor,
        occurrences,
        report,
    })
}
