//! Media Manager - filename parsing for movie and TV libraries
//!
//! Turns release-style filenames into structured metadata: a cleaned
//! human-readable title, an optional release year, and season/episode
//! information for shows. Startup configuration for the surrounding
//! metadata tooling lives in [config].

pub mod config;
pub mod services;
