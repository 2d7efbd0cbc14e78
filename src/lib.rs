//! Content store for a personal portfolio and blog.
//!
//! `folio-core` holds the blog's post list behind an injected key-value
//! store, filters posts and projects for the list views, and gates the
//! inline editor behind a cosmetic admin switch. Everything is synchronous
//! and single-threaded; nothing here is fatal to the caller.

pub mod admin;
pub mod config;
pub mod contact;
pub mod post;
pub mod projects;
pub mod repository;
pub mod search;
pub mod storage;
pub mod types;
