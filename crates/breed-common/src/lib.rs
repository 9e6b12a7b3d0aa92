pub mod answers;
pub mod catalog;
pub mod error;
pub mod model;
pub mod questions;
pub mod redis;
pub mod scoring;
pub mod store;
