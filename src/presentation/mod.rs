//! # Presentation Layer
//!
//! The bilingual view-state machine behind the front-ends: string tables,
//! the `Session` state machine, and a plain-text renderer for the CLI.

mod render;
mod session;
mod translations;

pub use render::*;
pub use session::*;
pub use translations::*;
