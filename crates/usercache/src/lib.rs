//! Cache-aside user repository.
//!
//! Backends for the traits in `usercache_core`: durable stores under
//! [`storage`], caches under [`cache`], and [`state::AppState`] wiring the
//! feature-selected pair into a [`storage::CachedUserRepository`].

pub mod cache;
pub mod config;
pub mod state;
pub mod storage;
