use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    db::models::{api::SendLinkRequest, sent_link::NewSentLink},
    error::AppResult,
    services::{referral_code::generate_referral_code, store::ReferralStore},
    utils::visit_link::build_visit_link,
    validation::send_link::required_fields,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedLink {
    pub link: String,
    pub referral_code: String,
}

/// Issues one referral link per call: fresh code, one stored row, one link.
#[derive(Clone)]
pub struct LinkIssuerService {
    store: Arc<dyn ReferralStore>,
    code_length: usize,
}

impl LinkIssuerService {
    pub fn new(store: Arc<dyn ReferralStore>, code_length: usize) -> Self {
        Self { store, code_length }
    }

    pub async fn issue(&self, req: &SendLinkRequest) -> AppResult<IssuedLink> {
        let (doctor_name, phone_number) = required_fields(req)?;

        let referral_code = generate_referral_code(self.code_length);
        let new_link = NewSentLink {
            doctor_name: doctor_name.to_string(),
            phone_number: phone_number.to_string(),
            referral_code: referral_code.clone(),
        };

        // 持久化成功后才返回链接
        if let Err(err) = self.store.insert(new_link).await {
            warn!(error = %err, "Failed to persist referral record");
            return Err(err);
        }

        let link = build_visit_link(doctor_name, &referral_code);
        info!(referral_code = %referral_code, "Referral link issued");

        Ok(IssuedLink { link, referral_code })
    }
}
