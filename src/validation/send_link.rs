use crate::db::models::api::{MISSING_FIELDS, SendLinkRequest};
use crate::error::AppError;

/// Both fields must be present and non-empty. The phone number format is
/// deliberately not checked here; that happens before submission.
pub fn required_fields(req: &SendLinkRequest) -> Result<(&str, &str), AppError> {
    match (req.doctor_name.as_deref(), req.phone_number.as_deref()) {
        (Some(doctor_name), Some(phone_number))
            if !doctor_name.is_empty() && !phone_number.is_empty() =>
        {
            Ok((doctor_name, phone_number))
        }
        _ => Err(AppError::validation(MISSING_FIELDS)),
    }
}
