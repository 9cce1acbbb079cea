pub mod enquiry;
pub mod store;
