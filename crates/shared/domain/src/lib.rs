//! # Domain Models
//!
//! Pure data types shared by every AntiBet crate, with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no regexes, no registry access. Just data and simple helpers.

pub mod analysis;
pub mod config;
pub mod constants;
pub mod education;
pub mod registry;
