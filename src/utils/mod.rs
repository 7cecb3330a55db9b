//! Utility modules for the Schedulist application.
//!
//! - [`datetime`] - Due date token parsing and timestamp formatting

pub mod datetime;
