pub mod command;
pub mod config;
pub mod driver;
pub mod events;
pub mod sys;
