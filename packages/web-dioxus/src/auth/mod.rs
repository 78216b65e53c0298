//! Admin session: context provider and browser storage

mod context;
mod storage;

pub use context::*;
pub use storage::*;
