//! Complaint Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{ComplaintRecord, ComplaintUpdate};
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Debug, Deserialize)]
struct TicketRow {
    #[serde(rename = "ticketNumber")]
    ticket_number: String,
}

#[derive(Clone)]
pub struct ComplaintRepository {
    base: BaseRepository,
}

impl ComplaintRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all complaints, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<ComplaintRecord>> {
        let records: Vec<ComplaintRecord> = self
            .base
            .db()
            .query("SELECT * FROM complaint ORDER BY createdDate DESC")
            .await?
            .take(0)?;
        Ok(records)
    }

    /// Find a complaint by ticket number
    pub async fn find_by_ticket(&self, ticket_number: &str) -> RepoResult<Option<ComplaintRecord>> {
        let ticket = ticket_number.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM complaint WHERE ticketNumber = $ticket LIMIT 1")
            .bind(("ticket", ticket))
            .await?;
        let records: Vec<ComplaintRecord> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    /// Create a new complaint
    pub async fn create(&self, record: ComplaintRecord) -> RepoResult<ComplaintRecord> {
        // Ticket numbers are the primary key of this table
        if self.find_by_ticket(&record.ticket_number).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Ticket '{}' already exists",
                record.ticket_number
            )));
        }

        let mut result = self
            .base
            .db()
            .query("CREATE complaint CONTENT $record")
            .bind(("record", record))
            .await?;

        let created: Option<ComplaintRecord> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create complaint".to_string()))
    }

    /// Update the mutable fields of a complaint
    pub async fn update(
        &self,
        ticket_number: &str,
        data: ComplaintUpdate,
    ) -> RepoResult<ComplaintRecord> {
        let mut record = self
            .find_by_ticket(ticket_number)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Ticket {} not found", ticket_number)))?;

        data.apply(&mut record);

        let ticket = ticket_number.to_string();
        let mut result = self
            .base
            .db()
            .query("UPDATE complaint CONTENT $record WHERE ticketNumber = $ticket")
            .bind(("record", record))
            .bind(("ticket", ticket))
            .await?;

        result
            .take::<Vec<ComplaintRecord>>(0)?
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Ticket {} not found", ticket_number)))
    }

    /// Delete a complaint by ticket number (unconditional)
    pub async fn delete(&self, ticket_number: &str) -> RepoResult<()> {
        let ticket = ticket_number.to_string();
        self.base
            .db()
            .query("DELETE complaint WHERE ticketNumber = $ticket")
            .bind(("ticket", ticket))
            .await?
            .check()?;
        Ok(())
    }

    /// Ticket numbers of the most recent records matching the prefix,
    /// descending; input for the ticket allocator
    pub async fn recent_ticket_numbers(
        &self,
        prefix: &str,
        limit: usize,
    ) -> RepoResult<Vec<String>> {
        let prefix = prefix.to_string();
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT ticketNumber FROM complaint \
                 WHERE string::starts_with(ticketNumber, $prefix) \
                 ORDER BY ticketNumber DESC LIMIT {limit}"
            ))
            .bind(("prefix", prefix))
            .await?;
        let rows: Vec<TicketRow> = result.take(0)?;
        Ok(rows.into_iter().map(|r| r.ticket_number).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{ComplaintCreate, ComplaintStatus};
    use crate::db::repository::test_db;
    use chrono::Utc;

    fn record(ticket: &str, problem: Option<&str>) -> ComplaintRecord {
        let create = ComplaintCreate {
            ticket_number: Some(ticket.to_string()),
            name: Some("Asha Kulkarni".into()),
            address: None,
            constituency: Some("Hadapsar".into()),
            language: Some("Marathi".into()),
            gender: Some("Female".into()),
            age: Some("26-35".into()),
            problem: problem.map(String::from),
            problem_des: None,
            phone_number: Some("9876543210".into()),
            member_name: None,
            member_phone: None,
            status: Some(ComplaintStatus::UnderReview),
            remarks: None,
            complaint_source: None,
            pdf_link: None,
        };
        create.into_record(ticket.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = ComplaintRepository::new(test_db().await);

        let created = repo
            .create(record("JD000001AP", Some("Water Supply")))
            .await
            .unwrap();
        assert_eq!(created.ticket_number, "JD000001AP");
        assert_eq!(created.complaint_source.as_deref(), Some("Web"));

        let found = repo.find_by_ticket("JD000001AP").await.unwrap().unwrap();
        assert_eq!(found.problem.as_deref(), Some("Water Supply"));
        assert_eq!(found.status, Some(ComplaintStatus::UnderReview));

        assert!(repo.find_by_ticket("JD999999AP").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_ticket_rejected() {
        let repo = ComplaintRepository::new(test_db().await);

        repo.create(record("JD000001AP", None)).await.unwrap();
        match repo.create(record("JD000001AP", None)).await {
            Err(RepoError::Duplicate(_)) => {}
            other => panic!("Expected Duplicate, got {:?}", other.map(|r| r.ticket_number)),
        }
    }

    #[tokio::test]
    async fn test_update_applies_allow_list_only() {
        let repo = ComplaintRepository::new(test_db().await);
        repo.create(record("JD000001AP", Some("Water Supply")))
            .await
            .unwrap();

        let update = ComplaintUpdate {
            status: Some(ComplaintStatus::ProblemSolved),
            remarks: Some("Resolved on site".into()),
            db_emp: Some("R. Patil".into()),
            complaint_source: None,
        };

        let updated = repo.update("JD000001AP", update).await.unwrap();
        assert_eq!(updated.status, Some(ComplaintStatus::ProblemSolved));
        assert_eq!(updated.remarks.as_deref(), Some("Resolved on site"));
        assert_eq!(updated.db_employee_name.as_deref(), Some("R. Patil"));
        // Untouched fields survive
        assert_eq!(updated.problem.as_deref(), Some("Water Supply"));
        assert_eq!(updated.complaint_source.as_deref(), Some("Web"));
    }

    #[tokio::test]
    async fn test_update_missing_ticket() {
        let repo = ComplaintRepository::new(test_db().await);
        let update = ComplaintUpdate {
            status: Some(ComplaintStatus::Closed),
            remarks: None,
            db_emp: None,
            complaint_source: None,
        };
        match repo.update("JD000042AP", update).await {
            Err(RepoError::NotFound(_)) => {}
            other => panic!("Expected NotFound, got {:?}", other.map(|r| r.ticket_number)),
        }
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = ComplaintRepository::new(test_db().await);
        repo.create(record("JD000001AP", None)).await.unwrap();

        repo.delete("JD000001AP").await.unwrap();
        assert!(repo.find_by_ticket("JD000001AP").await.unwrap().is_none());

        // Deleting a missing ticket is not an error
        repo.delete("JD000001AP").await.unwrap();
    }

    #[tokio::test]
    async fn test_recent_ticket_numbers() {
        let repo = ComplaintRepository::new(test_db().await);
        for ticket in ["JD000002AP", "JD000005AP", "JD000001AP", "XX000009AP"] {
            repo.create(record(ticket, None)).await.unwrap();
        }

        let recent = repo.recent_ticket_numbers("JD", 10).await.unwrap();
        assert_eq!(recent, vec!["JD000005AP", "JD000002AP", "JD000001AP"]);

        let capped = repo.recent_ticket_numbers("JD", 2).await.unwrap();
        assert_eq!(capped, vec!["JD000005AP", "JD000002AP"]);
    }
}
