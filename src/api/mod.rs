//! REST API client for the PokéHub backend and the PokeAPI.
//!
//! Every operation follows the same shape: build the URL from config,
//! attach the bearer headers where the endpoint needs them, check for a
//! 2xx, parse the JSON, and collapse any failure into a single
//! message-carrying [`ApiError`]. Login, registration, and profile
//! responses additionally feed the session store.

pub mod client;
pub mod error;

pub use client::{
    auth_headers, ApiClient, AuthResponse, MessageResponse, PokedexResponse, ProfileResponse,
    TopicLiked,
};
pub use error::ApiError;
