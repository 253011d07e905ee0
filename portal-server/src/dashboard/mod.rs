//! Dashboard aggregation
//!
//! Pure in-memory aggregation over complaint records: the handler loads
//! the (optionally date-filtered) records and this module reduces them
//! to the counters the dashboard renders. Age and status labels are
//! normalized here so charts never split one bucket across spellings.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use shared::dashboard::DashboardStats;
use std::collections::BTreeMap;

use crate::db::models::ComplaintRecord;
use crate::translate::english_problem;

/// Window for the "recent tickets" counter
const RECENT_DAYS: i64 = 7;

/// Canonical age buckets in display order
pub const AGE_BUCKETS: &[&str] = &["18-25", "26-35", "36-50", "51-65", "65+", "Other"];

/// Collapse an age value to its canonical bucket
///
/// Legacy rows carry Devanagari-digit labels with en-dashes; anything
/// unrecognized lands in "Other".
fn age_bucket(age: Option<&str>) -> &'static str {
    let age = match age {
        Some(a) if !a.trim().is_empty() => a.trim(),
        _ => return "Other",
    };
    match age {
        "18-25" | "१८–२५" | "१८-२५" => "18-25",
        "26-35" | "२६–३५" | "२६-३५" => "26-35",
        "36-50" | "३६–५०" | "३६-५०" => "36-50",
        "51-65" | "५१–६५" | "५१-६५" => "51-65",
        "65+" | "६५+" => "65+",
        _ => "Other",
    }
}

/// Keep only records created within the inclusive date range
///
/// Bounds are calendar dates; the end bound covers the whole day.
pub fn filter_by_date(
    records: Vec<ComplaintRecord>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<ComplaintRecord> {
    records
        .into_iter()
        .filter(|r| {
            let date = r.created_date.date_naive();
            start.is_none_or(|s| date >= s) && end.is_none_or(|e| date <= e)
        })
        .collect()
}

/// Reduce complaint records to dashboard statistics
pub fn aggregate(records: &[ComplaintRecord], now: DateTime<Utc>) -> DashboardStats {
    let total = records.len() as u64;
    let recent_cutoff = now - Duration::days(RECENT_DAYS);

    let mut status_counts: BTreeMap<String, u64> = BTreeMap::new();
    // Every age bucket is always present so charts get a fixed key set
    let mut age_counts: BTreeMap<String, u64> = AGE_BUCKETS
        .iter()
        .map(|bucket| (bucket.to_string(), 0))
        .collect();
    let mut department_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut recent = 0u64;
    let mut resolved = 0u64;

    for record in records {
        let status_label = record
            .status
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "No Status".to_string());
        *status_counts.entry(status_label).or_insert(0) += 1;

        *age_counts
            .entry(age_bucket(record.age.as_deref()).to_string())
            .or_insert(0) += 1;

        let department = match record.problem.as_deref() {
            Some(p) if !p.trim().is_empty() => english_problem(p),
            _ => "No Department".to_string(),
        };
        *department_counts.entry(department).or_insert(0) += 1;

        if record.created_date >= recent_cutoff {
            recent += 1;
        }
        if record.status.is_some_and(|s| s.is_resolved()) {
            resolved += 1;
        }
    }

    let resolution_rate = if total == 0 {
        "0.0".to_string()
    } else {
        format!("{:.1}", resolved as f64 * 100.0 / total as f64)
    };

    DashboardStats {
        total_tickets: total,
        status_counts,
        age_counts,
        department_counts,
        recent_tickets: recent,
        resolved_tickets: resolved,
        resolution_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{ComplaintCreate, ComplaintStatus};

    fn record(
        ticket: &str,
        age: Option<&str>,
        problem: Option<&str>,
        status: Option<ComplaintStatus>,
        created: DateTime<Utc>,
    ) -> ComplaintRecord {
        let create = ComplaintCreate {
            ticket_number: Some(ticket.to_string()),
            name: None,
            address: None,
            constituency: None,
            language: None,
            gender: None,
            age: age.map(String::from),
            problem: problem.map(String::from),
            problem_des: None,
            phone_number: None,
            member_name: None,
            member_phone: None,
            status,
            remarks: None,
            complaint_source: None,
            pdf_link: None,
        };
        create.into_record(ticket.to_string(), created)
    }

    #[test]
    fn test_aggregate_counts_and_rate() {
        let now = Utc::now();
        let records = vec![
            record(
                "JD000001AP",
                Some("26-35"),
                Some("जल आपूर्ति"),
                Some(ComplaintStatus::ProblemSolved),
                now - Duration::days(1),
            ),
            record(
                "JD000002AP",
                Some("२६–३५"),
                Some("Water Supply"),
                Some(ComplaintStatus::UnderReview),
                now - Duration::days(2),
            ),
            record(
                "JD000003AP",
                None,
                None,
                None,
                now - Duration::days(30),
            ),
        ];

        let stats = aggregate(&records, now);

        assert_eq!(stats.total_tickets, 3);
        // Devanagari and ASCII age labels land in the same bucket
        assert_eq!(stats.age_counts.get("26-35"), Some(&2));
        assert_eq!(stats.age_counts.get("Other"), Some(&1));
        // Hindi and English department values collapse to one key
        assert_eq!(stats.department_counts.get("Water Supply"), Some(&2));
        assert_eq!(stats.department_counts.get("No Department"), Some(&1));
        assert_eq!(stats.status_counts.get("Problem Solved"), Some(&1));
        assert_eq!(stats.status_counts.get("No Status"), Some(&1));
        assert_eq!(stats.recent_tickets, 2);
        assert_eq!(stats.resolved_tickets, 1);
        assert_eq!(stats.resolution_rate, "33.3");
    }

    #[test]
    fn test_aggregate_empty() {
        let stats = aggregate(&[], Utc::now());
        assert_eq!(stats.total_tickets, 0);
        assert_eq!(stats.resolution_rate, "0.0");
        assert!(stats.status_counts.is_empty());
        // Age buckets are zero-filled even with no records
        assert_eq!(stats.age_counts.len(), AGE_BUCKETS.len());
        assert!(stats.age_counts.values().all(|&n| n == 0));
    }

    #[test]
    fn test_age_counts_cover_every_bucket() {
        let records = vec![record(
            "JD000001AP",
            Some("65+"),
            None,
            None,
            Utc::now(),
        )];
        let stats = aggregate(&records, Utc::now());

        for bucket in AGE_BUCKETS {
            assert!(stats.age_counts.contains_key(*bucket), "missing {bucket}");
        }
        assert_eq!(stats.age_counts.get("65+"), Some(&1));
        assert_eq!(stats.age_counts.get("18-25"), Some(&0));
    }

    #[test]
    fn test_age_bucket_mapping() {
        assert_eq!(age_bucket(Some("65+")), "65+");
        assert_eq!(age_bucket(Some("६५+")), "65+");
        assert_eq!(age_bucket(Some("१८–२५")), "18-25");
        assert_eq!(age_bucket(Some("  36-50 ")), "36-50");
        assert_eq!(age_bucket(Some("ninety")), "Other");
        assert_eq!(age_bucket(Some("")), "Other");
        assert_eq!(age_bucket(None), "Other");
    }

    #[test]
    fn test_filter_by_date() {
        let day = |d: u32| {
            DateTime::parse_from_rfc3339(&format!("2025-06-{d:02}T10:00:00Z"))
                .unwrap()
                .with_timezone(&Utc)
        };
        let records = vec![
            record("JD000001AP", None, None, None, day(1)),
            record("JD000002AP", None, None, None, day(10)),
            record("JD000003AP", None, None, None, day(20)),
        ];

        let start = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

        let filtered = filter_by_date(records.clone(), Some(start), Some(end));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].ticket_number, "JD000002AP");

        // Open-ended ranges
        assert_eq!(filter_by_date(records.clone(), Some(start), None).len(), 2);
        assert_eq!(filter_by_date(records.clone(), None, Some(end)).len(), 2);
        assert_eq!(filter_by_date(records, None, None).len(), 3);
    }
}
