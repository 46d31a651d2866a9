//! weathercodi library
//!
//! Outfit recommendations from mocked weather and a locally persisted
//! wardrobe. This is the logic layer a UI calls into.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod services;
pub mod storage;
