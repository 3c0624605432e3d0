//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render plain markup from a `NavState`; event wiring happens in
//! the DOM host after mounting.

pub mod nav_actions;
