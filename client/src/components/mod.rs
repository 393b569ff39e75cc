//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome shared by every route and read navigation state
//! from the router context.

pub mod nav_bar;
