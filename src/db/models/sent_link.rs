use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::sent_links;

// 已发送的推荐链接记录, 只插入不更新
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = sent_links)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SentLink {
    pub id: Uuid,
    pub doctor_name: String,
    pub phone_number: String,
    pub referral_code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable, Clone, Debug, PartialEq, Eq)]
#[diesel(table_name = sent_links)]
pub struct NewSentLink {
    pub doctor_name: String,
    pub phone_number: String,
    pub referral_code: String,
}
