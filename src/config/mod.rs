//! Process-wide configuration, resolved once at startup.
//!
//! - [`app`] -- the display/endpoint snapshot consumed by UI collaborators
//!   ([`AppConfig`]), resolved from `NEXT_PUBLIC_*` variables with
//!   hardcoded fallbacks.
//! - [`upstream`] -- the forwarding target ([`Upstream`]) and optional
//!   static basic-auth pair ([`Credentials`]).
//!
//! Neither is ever mutated after startup. Both are injected into request
//! handlers through [`AppState`](crate::server::AppState).

pub mod app;
pub mod upstream;

pub use app::AppConfig;
pub use upstream::{Credentials, Upstream};
