//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP client and its default request headers. Backend
//! payload shapes live with the pages that consume them.

pub mod api;
