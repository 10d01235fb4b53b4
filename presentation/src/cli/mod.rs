//! CLI surface

pub mod commands;
