//! Section Routing
//!
//! The dashboard shows one of six fixed sections at a time. This module
//! defines the section menu and the router that owns the active selection.
//!
//! ```text
//!   select("insurance") → SectionRouter { active: Insurance } → Renderer
//!   select("bogus")     → warn! + SectionRouter { active: default }
//! ```

pub mod error;
pub mod router;
pub mod types;

pub use error::SectionError;
pub use router::{SectionRouter, Selection};
pub use types::{Section, SectionId, SECTIONS};
