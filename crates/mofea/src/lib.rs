#![deny(missing_docs)]
//! ## Crate Items Overview
//!
//! This section provides quick links to the main items in mofea.
//!
//! ### Modules
//! - [`mofea_core`](crate::mofea_core) - Rotation codecs, SMPL-X forward kinematics and feature extraction.
//! - [`mofea_utils`](crate::mofea_utils) - Numerical helpers, the ndarray to burn bridge and file listing.
//!
//! ## Binaries
//! The `extract_feats` package in `demos/` turns a directory of `.npy`
//! motion clips into feature files:
//!
//! ```text
//! extract_feats --input ./motion --variant rot6d --model ./data/smplx/SMPLX_neutral_array_f32_slim.npz
//! ```
pub use mofea_core;
pub use mofea_utils;
