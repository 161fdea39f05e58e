//! Application service layer - planning use case, config, handoff, export

pub mod app;
pub mod config;
pub mod export;
pub mod handoff;
pub mod repository;
