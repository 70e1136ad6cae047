//! SHAKTI AI web dashboard
//!
//! Leptos front end over the `shakti` client library: the landing and
//! about pages, authentication, the analysis dashboard and the user page.

pub mod api;
pub mod cookie;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod pages;
#[cfg(target_arch = "wasm32")]
pub mod state;

#[cfg(target_arch = "wasm32")]
pub use app::App;

#[cfg(target_arch = "wasm32")]
mod app;
