//! Core types and collaborator contracts for usercache.
//!
//! Everything in this crate is backend-agnostic: the concrete stores, caches
//! and the cache-aside repository live in the `usercache` crate.

pub mod cache;
pub mod context;
pub mod repository;
pub mod storage;
pub mod user;
