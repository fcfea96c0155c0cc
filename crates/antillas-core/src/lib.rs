//! Core domain for the Antillas services marketplace.
//!
//! - [`region`]: the supported territories
//! - [`theme`]: region palettes
//! - [`location`]: the persisted location preference
//! - [`chat`]: the scripted assistant
//! - [`config`]: application configuration model

pub mod chat;
pub mod config;
pub mod error;
pub mod location;
pub mod region;
pub mod theme;

pub use error::{AntillasError, Result};
pub use region::Region;
