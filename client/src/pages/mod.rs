//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages never check access themselves; `app` wraps them in
//! the guard chain from the route table.

pub mod content;
pub mod google_callback;
pub mod landing;
pub mod login;
pub mod oauth_connect;
pub mod pricing;
pub mod register;
pub mod resend_verification;
pub mod workspace;
