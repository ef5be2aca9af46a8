//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap pages with access control (`guards`), draw the blocking
//! layers guards can raise, and render shared chrome. They read session and
//! redirect state from Leptos context providers.

pub mod feature_locked;
pub mod guards;
pub mod site_nav;
pub mod spinner;
pub mod trial_paywall;
