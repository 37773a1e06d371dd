//! Client side of the invite flow: validates phone numbers, calls a
//! [`LinkIssuer`] once per number and collects the outcomes in order.

pub mod csv_rows;
pub mod issuer;
pub mod session;

pub use csv_rows::{PhoneRow, read_phone_rows, read_phone_rows_from_path};
pub use issuer::{HttpLinkIssuer, LinkIssuer, LocalLinkIssuer};
pub use session::{BulkSummary, InviteEvent, InviteSession};

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::db::models::api::{BulkResult, SendLinkRequest, SendLinkResponse};
use crate::validation::phone::{is_valid_phone_number, validate_phone_number};

pub const INVALID_ROW_MESSAGE: &str = "Invalid format";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

#[derive(Clone)]
pub struct InviteSubmitter {
    issuer: Arc<dyn LinkIssuer>,
}

impl InviteSubmitter {
    pub fn new(issuer: Arc<dyn LinkIssuer>) -> Self {
        Self { issuer }
    }

    /// Sends one invite. An invalid phone number never reaches the issuer.
    pub async fn submit_single(&self, doctor_name: &str, phone_number: &str) -> SendLinkResponse {
        if let Err(err) = validate_phone_number(phone_number) {
            return SendLinkResponse::failure(err.client_message());
        }

        let request = SendLinkRequest::new(doctor_name, phone_number);
        match self.issuer.send_link(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Send link request failed");
                SendLinkResponse::failure(NETWORK_ERROR_MESSAGE)
            }
        }
    }

    /// Sends one invite per row, strictly one after another. Every row yields
    /// exactly one result, in input order.
    pub async fn submit_bulk(&self, doctor_name: &str, rows: &[PhoneRow]) -> Vec<BulkResult> {
        let mut results = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            if !is_valid_phone_number(&row.phone_number) {
                debug!(row = index, "Skipping row with invalid phone number");
                results.push(BulkResult::failure(&row.phone_number, INVALID_ROW_MESSAGE));
                continue;
            }

            let request = SendLinkRequest::new(doctor_name, row.phone_number.as_str());
            let result = match self.issuer.send_link(&request).await {
                Ok(response) => BulkResult::from_response(&row.phone_number, response),
                Err(err) => {
                    warn!(row = index, error = %err, "Send link request failed");
                    BulkResult::failure(&row.phone_number, NETWORK_ERROR_MESSAGE)
                }
            };
            results.push(result);
        }

        let succeeded = results.iter().filter(|r| r.success).count();
        info!(
            total = results.len(),
            succeeded,
            failed = results.len() - succeeded,
            "Bulk submission finished"
        );

        results
    }
}
