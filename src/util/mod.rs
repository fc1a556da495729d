//! Session plumbing below the UI layer.
//!
//! `storage` abstracts the persistent key-value backend (browser
//! `localStorage` or in-memory); `auth` holds the navigation policy that
//! reads the session through it.

pub mod auth;
pub mod storage;
