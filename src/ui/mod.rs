//! Screen models.
//!
//! Each screen owns its local state (driven by an MVI reducer) and the
//! optimistic controllers for the values it confirms remotely. Shared data
//! arrives through an injected `RitualContext`.

pub mod app;
pub mod bonding;
pub mod footprint;
pub mod lab;
pub mod logs;
pub mod mvi;
pub mod profile;
pub mod reflection;
pub mod riddle;
pub mod streak;
