//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `redirect`) and provided as
//! `RwSignal` contexts from `App`, so guards and pages depend on small
//! injected models instead of globals.

pub mod redirect;
pub mod session;
