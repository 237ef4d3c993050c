//! Salary Calculator - remote job salary conversion service
//!
//! Converts a foreign salary into a Brazilian net monthly salary using a live
//! exchange rate, behind a per-client token bucket rate limiter.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
