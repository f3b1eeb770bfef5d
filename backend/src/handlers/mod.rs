// src/handlers/mod.rs

pub mod exercise;
pub mod health;
pub mod lesson;
pub mod progress;
