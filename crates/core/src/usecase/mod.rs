pub mod app_service;
pub mod pipeline;
