pub mod activity;
pub mod employee;
pub mod fields;
pub mod input;
pub mod listing;
pub mod location;
