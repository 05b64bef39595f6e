//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Encoding utilities (Base64)
//! - Password hashing and verification (Argon2id, PHC strings)

pub mod crypto;
pub mod password;
