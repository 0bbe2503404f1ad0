//! Tabela Library
//!
//! This module exposes the standings CLI internals for use in integration
//! tests.

pub mod cache;
pub mod cli;
pub mod clock;
pub mod config;
pub mod data;
pub mod provider;
pub mod table;
pub mod zones;
