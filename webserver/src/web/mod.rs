//! HTTP surface: page handlers and their view models

pub mod handlers;
pub mod views;
