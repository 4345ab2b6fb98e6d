//! State and HTTP client core for a small CRUD dashboard: a todo list and a
//! user-management table over a jsonplaceholder-shaped seed API.
//!
//! # Overview
//! Each module is a reducer-managed state machine behind a controller:
//! `TodoModule` fetches a seed list once and mutates locally only, while
//! `UserModule` sends every mutation to the remote API and reconciles local
//! state from the server's response. The rendering surface is not part of
//! this crate — a presentation layer binds to the controller contracts.
//!
//! # Design
//! - All state transitions go through pure `reduce` functions over typed
//!   action enums; controllers only dispatch.
//! - `ApiClient` is stateless and split into `build_*` / `parse_*` pairs,
//!   with the `HttpTransport` trait as the I/O seam (`UreqTransport` in
//!   production, scripted transports in tests).
//! - Failures are logged and swallowed at the module boundary as far as
//!   state is concerned, but every network-touching operation also returns
//!   `Result` so the failure contract stays inspectable.

pub mod client;
pub mod error;
pub mod http;
pub mod module;
pub mod state;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use module::{TodoModule, UserModule};
pub use state::todo::{TodoAction, TodoState};
pub use state::users::{UserAction, UserField, UserState};
pub use transport::UreqTransport;
pub use types::{TodoItem, User, UserForm};
