//! Render state for the navigation island.

pub mod nav;
