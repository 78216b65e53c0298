//! # partner-core
//!
//! Platform-independent state for the ABA Partner web frontend.
//!
//! The Dioxus app in `web-dioxus` is a thin view layer over this crate:
//!
//! - [`session`] - credential held in tab-scoped storage
//! - [`routing`] - admin paths and the session guard
//! - [`layout`] - sidebar state and the shell offsets derived from it
//! - [`header`] - panel, logout and search state machine for the admin header
//! - [`carousel`] / [`hero`] / [`client`] - the public hero slideshow and its remote config
//! - [`autoplay`] / [`timer`] - single-task autoplay and fixed delays
//!
//! Nothing here touches the DOM, so every behavior can be exercised from
//! native tests with a paused tokio clock.

pub mod autoplay;
pub mod carousel;
pub mod client;
pub mod config;
pub mod error;
pub mod header;
pub mod hero;
pub mod layout;
pub mod routing;
pub mod session;
pub mod timer;

pub use carousel::{Carousel, Tick};
pub use config::PortalConfig;
pub use error::{PortalError, Result};
pub use header::{HeaderCommand, HeaderController, HeaderEvent, LogoutPhase, Panel};
pub use hero::{HeroConfig, HeroText, Slide};
pub use layout::{LayoutState, ShellLayout, SidebarOffset};
pub use routing::{guard, AdminPath, GuardDecision, SearchQuery};
pub use session::{Credential, MemoryStorage, SessionStorage, SessionStore};
