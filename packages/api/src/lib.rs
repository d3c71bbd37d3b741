//! # API crate: typed access to the diet backend
//!
//! Everything the client knows about the backend lives here: the wire models, the
//! REST routes, the error type, and the HTTP client. Nutrition calculation, food
//! matching, and snack selection all happen on the server; this crate only moves
//! JSON back and forth.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`DietApi`] trait and the `reqwest`-backed [`HttpClient`] |
//! | [`config`] | [`ClientConfig`]: backend origin, from `diet.toml` or `DIET_API_URL` at build time |
//! | [`error`] | [`ApiError`] and the `detail`-or-fallback message rule |
//! | [`memory`] | [`MemoryApi`]: recording in-memory implementation for tests |
//! | [`models`] | Request/response bodies ([`Goal`], [`MealRequest`], [`Summary`], ...) |
//! | [`routes`] | [`Endpoint`]: method and path of each operation |
//!
//! ## Operations
//!
//! | Method & path | [`DietApi`] method |
//! |---------------|--------------------|
//! | `POST /goal` | `set_goal` |
//! | `POST /meal` | `upload_meal` |
//! | `GET /summary` | `get_summary` |
//! | `DELETE /meal/{index}` | `delete_meal` |
//! | `GET /foods/search?query=` | `search_foods` |
//! | `GET /recommend/snacks` | `recommend_snacks` |

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod routes;

pub use client::{DietApi, HttpClient};
pub use config::ClientConfig;
pub use error::ApiError;
pub use memory::{ApiCall, MemoryApi};
pub use models::*;
pub use routes::Endpoint;
