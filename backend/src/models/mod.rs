// src/models/mod.rs

pub mod exercise;
pub mod lesson;
pub mod user;
pub mod verification;
