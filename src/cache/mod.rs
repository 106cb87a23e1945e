//! Cache Module
//!
//! Provides an in-memory response cache whose entries expire a fixed
//! interval after insertion, purged by a background reaper.

mod entry;
mod store;
mod ttl_cache;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;
pub use ttl_cache::TtlCache;
