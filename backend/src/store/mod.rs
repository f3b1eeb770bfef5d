// src/store/mod.rs

pub mod catalog;
pub mod seed;
pub mod users;

pub use catalog::ContentStore;
pub use users::UserStore;
