pub mod visit_link;

pub use visit_link::{build_visit_link, encode_uri_component, resolve_link};
