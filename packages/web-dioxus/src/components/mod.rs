//! Reusable UI components

mod admin_footer;
mod admin_header;
mod admin_shell;
mod admin_sidebar;
mod hero;
mod loading;
mod redirect;
mod require_auth;

pub use admin_footer::*;
pub use admin_header::*;
pub use admin_shell::*;
pub use admin_sidebar::*;
pub use hero::*;
pub use loading::*;
pub use redirect::*;
pub use require_auth::*;
