//! Browser seams used by the renderer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module pairs a small trait with its `web-sys` implementation so the
//! renderer can run natively against in-memory fakes in tests.

pub mod navigate;
pub mod storage;
