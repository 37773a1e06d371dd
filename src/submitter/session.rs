use crate::db::models::api::{BulkResult, SendLinkResponse};
use crate::submitter::csv_rows::PhoneRow;

/// Everything an invite front end tracks between user actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InviteSession {
    pub doctor_name: String,
    pub phone_number: String,
    pub loading: bool,
    pub result: Option<SendLinkResponse>,
    pub rows: Vec<PhoneRow>,
    pub bulk_results: Vec<BulkResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InviteEvent {
    DoctorNameChanged(String),
    PhoneNumberChanged(String),
    RowsLoaded(Vec<PhoneRow>),
    SubmitStarted,
    SingleCompleted(SendLinkResponse),
    BulkCompleted(Vec<BulkResult>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl InviteSession {
    pub fn new(doctor_name: impl Into<String>) -> Self {
        Self {
            doctor_name: doctor_name.into(),
            ..Self::default()
        }
    }

    pub fn apply(self, event: InviteEvent) -> Self {
        match event {
            InviteEvent::DoctorNameChanged(doctor_name) => Self { doctor_name, ..self },
            InviteEvent::PhoneNumberChanged(phone_number) => Self { phone_number, ..self },
            InviteEvent::RowsLoaded(rows) => Self {
                rows,
                bulk_results: Vec::new(),
                ..self
            },
            InviteEvent::SubmitStarted => Self {
                loading: true,
                ..self
            },
            InviteEvent::SingleCompleted(result) => Self {
                loading: false,
                result: Some(result),
                ..self
            },
            InviteEvent::BulkCompleted(bulk_results) => Self {
                loading: false,
                bulk_results,
                ..self
            },
        }
    }

    /// Submissions are refused while one is already in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn bulk_summary(&self) -> BulkSummary {
        let succeeded = self.bulk_results.iter().filter(|r| r.success).count();
        BulkSummary {
            total: self.bulk_results.len(),
            succeeded,
            failed: self.bulk_results.len() - succeeded,
        }
    }
}
