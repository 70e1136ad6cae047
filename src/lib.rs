//! # SHAKTI client
//!
//! Client-side logic for the SHAKTI AI analysis dashboard: upload
//! validation, chat sessions, the sidebar list, authentication, profile
//! management and display lookups, written against the [`api::ShaktiApi`]
//! seam so the same code drives the browser UI and the terminal client.
//!
//! ## Overview
//!
//! The crate can be used in two ways:
//!
//! 1. **As a terminal client** - Run the `shakti` binary (feature `cli`)
//! 2. **As a library** - The Leptos UI in `ui/` depends on it with default
//!    features off and supplies a `gloo-net` implementation of the API
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shakti::api::HttpClient;
//! use shakti::chat::ChatSession;
//! use shakti::media::PendingFile;
//!
//! #[tokio::main]
//! async fn main() {
//!     let api = HttpClient::new("http://localhost:8000");
//!     let mut session = ChatSession::new_chat();
//!     session.composer.text = "Identify the vehicles".to_string();
//!     session
//!         .composer
//!         .uploads
//!         .ingest([PendingFile::new("recon.png", "image/png", std::fs::read("recon.png").unwrap())]);
//!
//!     match session.submit(&api, Some("token")).await {
//!         Ok(outcome) => println!("{:?}", outcome),
//!         Err(notice) => eprintln!("{}", notice),
//!     }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `http`  | `reqwest` implementation of the API seam |
//! | `cli`   | Terminal client (clap, owo-colors, config loading) |

pub mod api;
pub mod auth;
pub mod carousel;
pub mod chat;
pub mod config;
pub mod content;
pub mod media;
pub mod notice;
pub mod profile;
pub mod routes;
pub mod session;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;

pub use api::ShaktiApi;
pub use notice::{Notice, NoticeVariant};
pub use routes::Route;
pub use types::{ClientError, Result};

#[cfg(feature = "http")]
pub use api::HttpClient;
