//! Powerball Checker Library
//!
//! レシート写真のAI認識と当せん番号の照合を行う。

pub mod ai_provider;
pub mod batch;
pub mod cli;
pub mod config;
pub mod draw;
pub mod error;
pub mod matcher;
pub mod recognizer;
pub mod report;
pub mod scanner;
