//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome from props handed down by the composition
//! root; none of them reach into stores or the router on their own.

pub mod navigation;
