pub mod api;
pub mod sent_link;

pub use api::*;
pub use sent_link::*;
