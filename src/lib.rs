//! # Differential Threads
//!
//! Models of standard screw-thread geometries (ISO metric and Unified Thread
//! Standard) and tools for pairing them into differential-thread assemblies.
//!
//! A differential thread combines two threads of slightly different pitch on
//! a common axis; relative rotation advances the assembly by the *difference*
//! of the pitches, producing very fine linear motion per revolution. This
//! crate derives the geometry of every workable pairing from a catalog of
//! standard sizes: the effective pitch of the pair and the radial clearance
//! available for the smaller thread to nest inside the larger one.
//!
//! ## Crate layout
//!
//! - [`thread`]: The [`Thread`](thread::Thread) entity and its factory
//!   constructors for the ISO metric and UTS standard variants.
//! - [`differential`]: [`DifferentialPair`](differential::DifferentialPair),
//!   the derived geometry of one candidate pairing.
//! - [`catalog`]: Pairwise generation over a thread collection, plus the
//!   embedded reference table of standard sizes.
//! - [`report`]: Serializable presentation records for generated catalogs.
//! - [`support`]: Supporting utilities (unit extensions, numeric constraints).

pub mod catalog;
pub mod differential;
pub mod report;
pub mod support;
pub mod thread;
