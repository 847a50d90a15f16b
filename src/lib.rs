// src/lib.rs

//! birdref Crawler Library

pub mod error;
pub mod models;
pub mod page;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
