//! TutorDesk Engine - the Directory Store
//!
//! `DirectoryStore` is the handle request handlers are given. It owns one
//! SQLite connection for its lifetime (opened with [`DirectoryStore::open`],
//! released with [`DirectoryStore::close`]) and exposes every directory
//! operation with boundary logging.

pub mod config;
pub mod directory;

pub use config::StoreConfig;
pub use directory::DirectoryStore;
pub use tutordesk_store::schema::SchemaStatus;
