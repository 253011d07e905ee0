//! Ticket number allocation
//!
//! Ticket numbers follow the template `<PREFIX><NNNNNN><SUFFIX>` with a
//! 6-digit zero-padded sequence, e.g. `JD000042AP`. The allocator scans
//! recent ticket numbers and produces max+1; it never fills gaps, and it
//! ignores malformed or out-of-bound values so corrupted legacy data can
//! never become the basis for incrementing.

/// Width of the numeric segment
pub const SEQUENCE_WIDTH: usize = 6;

/// How many recent records the allocator scans
pub const SCAN_LIMIT: usize = 10;

/// Ticket template policy
///
/// Observed deployments disagree on both the prefix ("JD" vs "JDW") and
/// the sanity bound (1,000 vs 100,000), so all three are configuration,
/// not constants.
#[derive(Debug, Clone)]
pub struct TicketPolicy {
    pub prefix: String,
    pub suffix: String,
    /// Parsed sequences at or above this value are treated as corrupted
    /// legacy data and ignored
    pub max_sequence: u32,
}

impl Default for TicketPolicy {
    fn default() -> Self {
        Self {
            prefix: "JD".to_string(),
            suffix: "AP".to_string(),
            max_sequence: 100_000,
        }
    }
}

impl TicketPolicy {
    /// Load the policy from `TICKET_PREFIX` / `TICKET_SUFFIX` /
    /// `TICKET_MAX_SEQUENCE`, falling back to the defaults
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            prefix: std::env::var("TICKET_PREFIX").unwrap_or(default.prefix),
            suffix: std::env::var("TICKET_SUFFIX").unwrap_or(default.suffix),
            max_sequence: std::env::var("TICKET_MAX_SEQUENCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_sequence),
        }
    }

    /// Exact length of a well-formed ticket number
    pub fn ticket_len(&self) -> usize {
        self.prefix.len() + SEQUENCE_WIDTH + self.suffix.len()
    }

    /// Parse the sequence out of a well-formed ticket number
    ///
    /// Returns `None` for the wrong length, wrong prefix/suffix, or a
    /// non-numeric segment. The sanity bound is applied by the caller.
    pub fn parse_sequence(&self, ticket: &str) -> Option<u32> {
        if ticket.len() != self.ticket_len() {
            return None;
        }
        let digits = ticket
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;
        if digits.len() != SEQUENCE_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Format a sequence into the full ticket number
    pub fn format(&self, sequence: u32) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            sequence,
            self.suffix,
            width = SEQUENCE_WIDTH
        )
    }
}

/// Compute the next ticket number from the scanned ticket numbers
///
/// Input order is irrelevant: the true maximum of the surviving
/// candidates is used. Candidates outside `(0, max_sequence)` are
/// discarded. An empty (or fully-discarded) scan starts the sequence
/// at 1.
pub fn next_ticket_number<I, S>(existing: I, policy: &TicketPolicy) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let max = existing
        .into_iter()
        .filter_map(|t| policy.parse_sequence(t.as_ref()))
        .filter(|&n| n > 0 && n < policy.max_sequence)
        .max()
        .unwrap_or(0);

    policy.format(max + 1)
}
