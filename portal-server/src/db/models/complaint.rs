//! Complaint Record Model
//!
//! Wire names follow the legacy `complaint_records` schema verbatim:
//! camelCase for most columns, but `pdf_link` and `problem_des` stay
//! snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complaint workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Work in Progress")]
    WorkInProgress,
    Rejected,
    #[serde(rename = "Wrong Department")]
    WrongDepartment,
    #[serde(rename = "Problem Solved")]
    ProblemSolved,
    Closed,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnderReview => "Under Review",
            Self::WorkInProgress => "Work in Progress",
            Self::Rejected => "Rejected",
            Self::WrongDepartment => "Wrong Department",
            Self::ProblemSolved => "Problem Solved",
            Self::Closed => "Closed",
        }
    }

    /// Resolved statuses count toward the dashboard resolution rate
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::ProblemSolved | Self::Closed)
    }
}

/// One citizen complaint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintRecord {
    #[serde(rename = "ticketNumber")]
    pub ticket_number: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub constituency: Option<String>,
    pub language: Option<String>,
    pub gender: Option<String>,
    /// Age bucket as entered, e.g. "26-35"
    pub age: Option<String>,
    /// Department category, stored in canonical English form
    pub problem: Option<String>,
    pub problem_des: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "memberName")]
    pub member_name: Option<String>,
    #[serde(rename = "memberPhone")]
    pub member_phone: Option<String>,
    pub status: Option<ComplaintStatus>,
    pub remarks: Option<String>,
    /// Officer handling the case
    #[serde(rename = "dbEmployeeName")]
    pub db_employee_name: Option<String>,
    #[serde(rename = "complaintSource")]
    pub complaint_source: Option<String>,
    pub pdf_link: Option<String>,
    /// Set at creation, immutable afterwards
    #[serde(rename = "createdDate")]
    pub created_date: DateTime<Utc>,
}

/// Create complaint payload
///
/// Every field except the ticket number is nullable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintCreate {
    #[serde(rename = "ticketNumber")]
    pub ticket_number: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub constituency: Option<String>,
    pub language: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub problem: Option<String>,
    pub problem_des: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "memberName")]
    pub member_name: Option<String>,
    #[serde(rename = "memberPhone")]
    pub member_phone: Option<String>,
    pub status: Option<ComplaintStatus>,
    pub remarks: Option<String>,
    #[serde(rename = "complaintSource")]
    pub complaint_source: Option<String>,
    pub pdf_link: Option<String>,
}

impl ComplaintCreate {
    /// Build the full record: ticket number already validated, problem
    /// already normalized to canonical English.
    pub fn into_record(self, ticket_number: String, now: DateTime<Utc>) -> ComplaintRecord {
        ComplaintRecord {
            ticket_number,
            name: self.name,
            address: self.address,
            constituency: self.constituency,
            language: self.language,
            gender: self.gender,
            age: self.age,
            problem: self.problem,
            problem_des: self.problem_des,
            phone_number: self.phone_number,
            member_name: self.member_name,
            member_phone: self.member_phone,
            status: self.status,
            remarks: self.remarks,
            db_employee_name: None,
            complaint_source: Some(
                self.complaint_source.unwrap_or_else(|| "Web".to_string()),
            ),
            pdf_link: self.pdf_link,
            created_date: now,
        }
    }
}

/// Update complaint payload - the mutable field allow-list
///
/// `dbEmp` is the legacy request key for the officer column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ComplaintStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(rename = "dbEmp", skip_serializing_if = "Option::is_none")]
    pub db_emp: Option<String>,
    #[serde(rename = "complaintSource", skip_serializing_if = "Option::is_none")]
    pub complaint_source: Option<String>,
}

impl ComplaintUpdate {
    /// True when no allow-listed field is present
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.remarks.is_none()
            && self.db_emp.is_none()
            && self.complaint_source.is_none()
    }

    /// Apply the provided fields onto an existing record
    pub fn apply(self, record: &mut ComplaintRecord) {
        if let Some(status) = self.status {
            record.status = Some(status);
        }
        if let Some(remarks) = self.remarks {
            record.remarks = Some(remarks);
        }
        if let Some(db_emp) = self.db_emp {
            record.db_employee_name = Some(db_emp);
        }
        if let Some(source) = self.complaint_source {
            record.complaint_source = Some(source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&ComplaintStatus::UnderReview).unwrap();
        assert_eq!(json, "\"Under Review\"");

        let status: ComplaintStatus = serde_json::from_str("\"Problem Solved\"").unwrap();
        assert_eq!(status, ComplaintStatus::ProblemSolved);
        assert!(status.is_resolved());
        assert!(!ComplaintStatus::WorkInProgress.is_resolved());
    }

    #[test]
    fn test_create_defaults() {
        let create: ComplaintCreate = serde_json::from_str("{}").unwrap();
        let record = create.into_record("JD000001AP".into(), Utc::now());

        assert_eq!(record.ticket_number, "JD000001AP");
        assert_eq!(record.complaint_source.as_deref(), Some("Web"));
        assert!(record.status.is_none());
    }

    #[test]
    fn test_update_allow_list() {
        let update: ComplaintUpdate =
            serde_json::from_str(r#"{"status": "Closed", "dbEmp": "R. Patil"}"#).unwrap();
        assert!(!update.is_empty());

        let create: ComplaintCreate = serde_json::from_str("{}").unwrap();
        let mut record = create.into_record("JD000001AP".into(), Utc::now());
        record.remarks = Some("initial".into());

        update.apply(&mut record);
        assert_eq!(record.status, Some(ComplaintStatus::Closed));
        assert_eq!(record.db_employee_name.as_deref(), Some("R. Patil"));
        // Absent fields stay untouched
        assert_eq!(record.remarks.as_deref(), Some("initial"));
    }

    #[test]
    fn test_empty_update_detected() {
        let update: ComplaintUpdate = serde_json::from_str(r#"{"name": "ignored"}"#).unwrap();
        assert!(update.is_empty());
    }
}
