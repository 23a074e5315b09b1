//! API route handlers

pub mod actions;
pub mod categories;
pub mod community;
pub mod health;
pub mod leaderboard;
pub mod progress;
pub mod resources;
