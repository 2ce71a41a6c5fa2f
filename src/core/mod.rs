pub mod attendance;
pub mod catalog;
pub mod confirm;
pub mod enrolled;
pub mod listing;
pub mod log;
pub mod pending;
pub mod report;
pub mod search;
pub mod store;
