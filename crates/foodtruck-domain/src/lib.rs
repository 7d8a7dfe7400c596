//! Domain layer for the food truck finder
//!
//! Holds the permit record model, the schedule evaluator and the record
//! filter. Nothing here performs I/O.

pub mod model;
pub mod repository;
pub mod service;
