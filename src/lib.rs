pub mod config;
pub mod error;
pub mod extract;
pub mod fixture;
pub mod llm;
pub mod reflect;
pub mod runner;
pub mod tools;
pub mod workflow;
