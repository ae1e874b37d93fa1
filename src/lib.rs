//! Pastelink - a pastebin and URL shortener backend
//!
//! This library provides the core functionality for the Pastelink service:
//! resource identity allocation, persistence, access counting, and the
//! HTTP surface that exposes them.
//!
//! # Architecture
//! - `storage`: storage gateway trait and backends (SeaORM, in-memory)
//! - `services`: identifier allocation and resource business logic
//! - `api`: HTTP handlers and routing
//! - `config`: configuration management
//! - `system`: logging and process setup
//! - `utils`: random codes, expiration normalization, URL validation

pub mod api;
pub mod config;
pub mod errors;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
