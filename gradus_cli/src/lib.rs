//! Gradus console front end: menus, prompts and report rendering.

pub mod commands;
pub mod demo;
pub mod menu;
pub mod report;
