use sha3::{Digest, Sha3_224};
use strum::{Display, IntoStaticStr};

use crate::CandidateOccurrence;

/// Default namespace appended to every event id.
pub const DEFAULT_UID_DOMAIN: &str = "luach.calendar";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    AllDay,
    Sunset,
}

/// First 8 hex characters of the SHA3-224 digest of `title`.
pub fn title_digest(title: &str) -> String {
    let mut hasher = Sha3_224::default();
    hasher.update(title.as_bytes());

    hasher.finalize()[..4]
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// Id of one logical occurrence. Depends only on the event kind, the
/// resolved Hebrew year and month, the anchor's target day and the title, so
/// regenerating a feed yields the same ids and subscribed clients update
/// entries in place instead of duplicating them.
pub fn stable_id(
    kind: EventKind,
    candidate: &CandidateOccurrence,
    title: &str,
    domain: &str,
) -> String {
    format!(
        "{kind}-{}-{}-{}-{}@{domain}",
        candidate.hebrew_year(),
        candidate.resolved_month(),
        candidate.target_day,
        title_digest(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_hebrew::HebrewDate;
    use time::macros::date;

    fn candidate() -> CandidateOccurrence {
        CandidateOccurrence {
            hebrew_date: HebrewDate::new(5784, 13, 14).unwrap(),
            target_day: 14,
            gregorian_date: date!(2024 - 03 - 24),
        }
    }

    #[test]
    fn test_digest_is_eight_hex_chars() {
        let digest = title_digest("Purim");
        assert_eq!(digest.len(), 8);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, title_digest("Purim"));
        assert_ne!(digest, title_digest("Purim "));
    }

    #[test]
    fn test_digest_of_empty_title() {
        // SHA3-224("") = 6b4e03423667dbb7...
        assert_eq!(title_digest(""), "6b4e0342");
    }

    #[test]
    fn test_stable_id_layout() {
        let id = stable_id(EventKind::AllDay, &candidate(), "", DEFAULT_UID_DOMAIN);
        assert_eq!(id, "allday-5784-13-14-6b4e0342@luach.calendar");

        let id = stable_id(EventKind::Sunset, &candidate(), "", "example.org");
        assert_eq!(id, "sunset-5784-13-14-6b4e0342@example.org");
    }
}
