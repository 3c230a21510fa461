//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Bearer credential extraction from request headers

pub mod bearer;
