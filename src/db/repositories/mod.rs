pub mod sent_links;

pub use sent_links::SentLinksRepo;
