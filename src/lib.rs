//! DarkST Damage - attack damage calculator driven by enemy and motion tables

pub mod combat;
pub mod core;
pub mod session;
pub mod tables;
