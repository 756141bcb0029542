//! Play catalog domain module.
//!
//! This crate contains the play catalog and genre model: which plays exist,
//! what they are called, and which pricing category they fall into. The
//! catalog is supplied fully loaded by an external collaborator; the core
//! never mutates it.

pub mod play;

pub use play::{Catalog, Genre, Play};
