//! HTTP route handlers

pub mod ask;
pub mod documents;
pub mod quiz;
pub mod sheet;
