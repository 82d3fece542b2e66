//! Core state types: the screen enumeration and the citizen session.
//!
//! Both are owned and mutated only by the [`ViewRouter`](crate::router::ViewRouter);
//! everything else reads them.

mod screen;
mod session;

pub use screen::*;
pub use session::*;
