//! Quillbox portal: the operation surface a presentation layer calls.
//!
//! Composes the credential and content stores behind one handle,
//! resolves the current session into the author identity, and surfaces
//! every failure as a typed [`PortalError`]. Construction is explicit
//! dependency injection: one `Portal` is opened at process start and
//! passed to whatever renders it.

mod error;
mod portal;
pub mod services;

pub use error::{PortalError, PortalResult};
pub use portal::Portal;
pub use services::{AuthService, ContentService};
