//! Agent entities — the routing targets

pub mod entities;
