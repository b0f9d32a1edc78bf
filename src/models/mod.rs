//! Data models for the club site backend.
//!
//! Wire names match the frontend TypeScript interfaces exactly for seamless interoperability.

mod project;
mod registration;
mod session;
mod snapshot;
mod timeline;

pub use project::*;
pub use registration::*;
pub use session::*;
pub use snapshot::*;
pub use timeline::*;
