//! assistkit Library
//!
//! Core modules for the assistkit command-line assistant: the command
//! router and its skills, the HTTP API, the BMI calculator and the weather
//! viewer.

pub mod assistant;
pub mod bmi;
pub mod config;
pub mod core;
pub mod error;
pub mod server;
pub mod skills;
pub mod tts;
pub mod weather;
