//! Admin pages

mod dashboard;
mod login;
mod managers;
mod search;

pub use dashboard::*;
pub use login::*;
pub use managers::*;
pub use search::*;
