//! Reusable HTML components for page generation
//!
//! This module provides the Maud component functions every page is built
//! from: the site header, the responsive layout wrapper, and the document
//! head and navigation helpers they delegate to.

pub mod header;
pub mod layout;
pub mod metadata;
pub mod nav;
