//! Garage Climate - temperature and humidity ingestion API
//!
//! This library exposes the core modules for testing and reuse.

pub mod chart;
pub mod common;
pub mod config;
pub mod entity;
pub mod error;
pub mod pages;
pub mod routes;
pub mod services;
