//! Terminal front end: a menu scene for settings and a table scene for play.

pub mod app;
pub mod controller;
pub mod ui;
