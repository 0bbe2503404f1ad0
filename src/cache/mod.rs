//! Cache module for storing standings payloads on disk
//!
//! This module persists one fetched standings payload per competition as a
//! two-line JSONL record: a metadata line with the update timestamp followed
//! by the raw API payload. Reads distinguish a missing record from a corrupt
//! one so the provider can recover from corruption by refetching.

mod store;

pub use store::{CacheLookup, CacheRecord, CacheStore};
