//! HTTP handlers

pub mod health;
pub mod hr;
pub mod security;
