//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; access control is applied by
//! `components::route_gate` before a page is built.

pub mod inventory;
pub mod login;
