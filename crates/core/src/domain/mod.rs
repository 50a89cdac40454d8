pub mod error;
pub mod pass;
pub mod request;
pub mod settings;
pub mod style;
