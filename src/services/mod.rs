pub mod link_issuer;
pub mod referral_code;
pub mod store;

pub use link_issuer::{IssuedLink, LinkIssuerService};
pub use store::{PgReferralStore, ReferralStore};
