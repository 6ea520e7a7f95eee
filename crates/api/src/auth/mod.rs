//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing for the admin credential.
//! - [`jwt`] -- access-token generation and validation.
//!
//! Player passwords use the PBKDF2 format in `craftadmin_core::credentials`.

pub mod jwt;
pub mod password;
