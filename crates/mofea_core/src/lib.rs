//! Rotation codecs, SMPL-X forward kinematics and the motion feature
//! extraction pipeline built on top of them.
pub mod common;
pub mod conversions;
pub mod error;
pub mod features;
pub mod smpl_h;
pub mod smpl_x;

pub use error::{MofeaError, Result};
