//! Parametric geometry for **roller and ball wave drives**, the eccentric cycloidal
//! speed reducers built from a lobed disk, an eccentric cam and a ring of rolling elements.
//!
//! Given the dialog inputs of a drive ([`WaveDriveInputs`]), the crate derives every
//! dimension ([`WaveDriveParams`]), samples the lobed disk outline ([`profile`]), places the
//! rolling elements and separator holes ([`layout`]), and gates the whole set on a single
//! feasibility check ([`feasibility`]). All evaluation is pure and synchronous, cheap enough
//! to re-run on every keystroke of an interactive host.
//!
//! ```
//! use wavedrive::{WaveDriveInputs, drive::evaluate};
//!
//! let inputs = WaveDriveInputs { use_balls: true, ..Default::default() };
//! let evaluation = evaluate(&inputs).unwrap();
//! assert!(evaluation.is_feasible());
//! let drive = evaluation.drive.unwrap();
//! assert_eq!(drive.profile_points().len(), 145);
//! assert_eq!(drive.roller_centers().len(), 17);
//! ```
//!
//! # Features
//! #### Default
//! - **svg-io**: export the plan-view sketch of all parts as SVG
//! - **dxf-io**: export the plan-view sketch of all parts as DXF

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod drive;
pub mod errors;
pub mod feasibility;
pub mod float_types;
pub mod io;
pub mod layout;
pub mod orbit;
pub mod params;
pub mod profile;
pub mod sketch;

pub use drive::{Evaluation, WaveDrive, evaluate};
pub use errors::{GeometryError, ParameterError, WaveDriveError};
pub use feasibility::{FeasibilityReport, is_feasible};
pub use params::{WaveDriveInputs, WaveDriveParams};
