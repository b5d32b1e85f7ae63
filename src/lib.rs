// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Augmented-reality flower garden controller.
//!
//! Marigold keeps a virtual camera locked to a device's tracked pose and
//! lets the user plant batches of flowers on the ground by tapping. Each
//! flower sprouts at zero size and grows, accelerating, until it reaches its
//! own randomly chosen ceiling.
//!
//! # Key entry points
//!
//! - [`session::ArSession`] - the lifecycle controller the host drives
//! - [`pipeline::PipelineModule`] - the session behind the tracking engine's
//!   named hooks
//! - [`host`] - the tracking, rendering and loading capabilities a host
//!   provides
//! - [`options::Options`] - runtime configuration (camera, placement,
//!   growth, marker, scene)
//!
//! # Frame flow
//!
//! Each tracked frame the host calls `update` with the tracking sample,
//! which rewrites the camera projection and pose and recomputes marker
//! visibility. Touches are hit-tested against the ground plane through that
//! camera and spawn flowers into the scene's growth registry. `render`
//! advances every flower by one growth tick and hands the scene to the
//! host's renderer.

pub mod camera;
pub mod error;
pub mod host;
pub mod input;
pub mod marker;
pub mod options;
pub mod picking;
pub mod pipeline;
pub mod replay;
pub mod scene;
pub mod session;
pub mod util;

pub use error::MarigoldError;
