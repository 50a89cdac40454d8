pub mod generator;
pub mod normalizer;
pub mod output;
pub mod prompts;
pub mod settings_store;
