//! Entry → ticket mapping and hour rounding.

use harvestmine_domain::constants::TICKET_PREFIX;
use harvestmine_domain::{Result, SyncError, TicketId};

/// Tolerance absorbing binary float error before a half-up decision.
const ROUNDING_EPSILON: f64 = 1e-9;

/// Where an entry goes in Redmine and what comment it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub ticket: TicketId,
    pub comment: String,
}

/// Resolve the ticket for an entry from its notes.
///
/// `#4521` books onto ticket 4521 with an empty comment. Anything else after
/// the `#` is a parse error; it never falls back to the default ticket. Notes
/// without the prefix go to `default_ticket` verbatim.
///
/// # Errors
/// `SyncError::EntryParse` when the text after `#` is not an unsigned
/// integer that fits a ticket id.
pub fn resolve_destination(notes: &str, default_ticket: TicketId) -> Result<Destination> {
    let Some(reference) = notes.strip_prefix(TICKET_PREFIX) else {
        return Ok(Destination { ticket: default_ticket, comment: notes.to_string() });
    };

    let digits = reference.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error(notes));
    }

    let ticket = digits.parse::<TicketId>().map_err(|_| parse_error(notes))?;
    Ok(Destination { ticket, comment: String::new() })
}

/// Round `hours` to the nearest multiple of `granularity`, halves going up.
///
/// A missing or non-positive granularity leaves the value unchanged.
#[must_use]
pub fn round_hours(hours: f64, granularity: Option<f64>) -> f64 {
    match granularity {
        Some(step) if step > 0.0 => {
            let steps = (hours / step + 0.5 + ROUNDING_EPSILON).floor();
            // strip float noise such as 0.30000000000000004
            (steps * step * 1e6).round() / 1e6
        }
        _ => hours,
    }
}

fn parse_error(notes: &str) -> SyncError {
    SyncError::EntryParse(format!("Can't parse ID on {notes}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: TicketId = 37080;

    #[test]
    fn explicit_ticket_has_empty_comment() {
        let destination = resolve_destination("#4521", DEFAULT).expect("ticket");
        assert_eq!(destination, Destination { ticket: 4521, comment: String::new() });
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let destination = resolve_destination("# 4521 ", DEFAULT).expect("ticket");
        assert_eq!(destination.ticket, 4521);
    }

    #[test]
    fn free_text_goes_to_default_ticket() {
        let destination = resolve_destination("Fixed login bug", DEFAULT).expect("default");
        assert_eq!(destination.ticket, DEFAULT);
        assert_eq!(destination.comment, "Fixed login bug");
    }

    #[test]
    fn empty_notes_go_to_default_ticket() {
        let destination = resolve_destination("", DEFAULT).expect("default");
        assert_eq!(destination, Destination { ticket: DEFAULT, comment: String::new() });
    }

    #[test]
    fn non_numeric_reference_is_a_parse_error() {
        for notes in ["#abc", "#", "#12 review", "#-5", "#+5", "#99999999999"] {
            let err = resolve_destination(notes, DEFAULT).expect_err(notes);
            assert_eq!(err, SyncError::EntryParse(format!("Can't parse ID on {notes}")));
        }
    }

    #[test]
    fn hash_in_the_middle_is_plain_text() {
        let destination = resolve_destination("see #12", DEFAULT).expect("default");
        assert_eq!(destination.ticket, DEFAULT);
        assert_eq!(destination.comment, "see #12");
    }

    #[test]
    fn rounds_to_nearest_quarter() {
        assert_eq!(round_hours(1.1, Some(0.25)), 1.0);
        assert_eq!(round_hours(1.2, Some(0.25)), 1.25);
        assert_eq!(round_hours(0.05, Some(0.25)), 0.0);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_hours(1.125, Some(0.25)), 1.25);
        assert_eq!(round_hours(0.25, Some(0.1)), 0.3);
        assert_eq!(round_hours(2.5, Some(1.0)), 3.0);
    }

    #[test]
    fn missing_or_invalid_granularity_is_identity() {
        assert_eq!(round_hours(1.1, None), 1.1);
        assert_eq!(round_hours(1.1, Some(0.0)), 1.1);
        assert_eq!(round_hours(1.1, Some(-0.5)), 1.1);
    }
}
