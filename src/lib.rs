//! Client core for the ARACY bonding ritual app.
//!
//! Screens apply changes optimistically through [`optimistic`] and confirm
//! them against the ritual API through [`remote`].

pub mod config;
pub mod context;
pub mod logging;
pub mod optimistic;
pub mod remote;
pub mod ui;
