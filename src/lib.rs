//! Registration form core and its terminal front end
//!
//! `state` and `submission` hold the presentation-independent form logic;
//! `app` and `ui` bind it to a Ratatui terminal.

pub mod app;
pub mod config;
pub mod platform;
pub mod state;
pub mod submission;
pub mod ui;
