use diesel::prelude::*;

use crate::db::models::sent_link::{NewSentLink, SentLink};

pub struct SentLinksRepo;

impl SentLinksRepo {
    pub fn insert(conn: &mut PgConnection, new_link: &NewSentLink) -> Result<SentLink, diesel::result::Error> {
        diesel::insert_into(crate::schema::sent_links::table)
            .values(new_link)
            .get_result(conn)
    }
}
