//! Public-facing pages

mod home;

pub use home::*;
