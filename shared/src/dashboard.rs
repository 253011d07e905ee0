//! Dashboard statistics DTOs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated dashboard statistics
///
/// Department counts are keyed by the canonical English department name;
/// multilingual legacy values are collapsed before counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalTickets")]
    pub total_tickets: u64,
    #[serde(rename = "statusCounts")]
    pub status_counts: BTreeMap<String, u64>,
    #[serde(rename = "ageCounts")]
    pub age_counts: BTreeMap<String, u64>,
    #[serde(rename = "departmentCounts")]
    pub department_counts: BTreeMap<String, u64>,
    #[serde(rename = "recentTickets")]
    pub recent_tickets: u64,
    #[serde(rename = "resolvedTickets")]
    pub resolved_tickets: u64,
    /// Percentage of resolved tickets, one decimal place, e.g. "42.9"
    #[serde(rename = "resolutionRate")]
    pub resolution_rate: String,
}

/// Ticket number allocation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketNumberResponse {
    #[serde(rename = "ticketNumber")]
    pub ticket_number: String,
}
