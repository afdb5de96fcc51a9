//! Service tests for webserver

pub mod submission_log;
