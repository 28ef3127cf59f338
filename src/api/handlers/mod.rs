//! API handlers

pub mod todos;
