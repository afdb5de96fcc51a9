//! Request handlers, one module per page

pub mod api;
pub mod dashboard;
pub mod orders;
pub mod pages;
pub mod register;
pub mod static_files;
pub mod support;
pub mod tracking;
