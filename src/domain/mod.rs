//! Domain layer - pure business logic with no I/O.

pub mod rate_limit;
pub mod salary;
