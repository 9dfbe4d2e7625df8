//! Domain model of the note editing surface.
//!
//! # Responsibility
//! - Define plain-data types shared by the view controllers.
//! - Keep parsing of raw form input lenient and side-effect free.
//!
//! # Invariants
//! - Nothing in this module talks to collaborators.

pub mod mode;
pub mod snapshot;
