//! Request extractors shared by protected handlers.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.

pub mod auth;
