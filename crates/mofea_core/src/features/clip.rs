use crate::{
    common::{pose::Pose, types::SmplType},
    conversions::rotation::ax_from_6v,
    error::{MofeaError, Result},
    smpl_h::smpl_h::NUM_JOINTS,
};
use ndarray as nd;
use ndarray::prelude::*;
use ndarray_npy::read_npy;
use std::path::Path;

/// Number of joints with a rotation in a clip, root included
pub const NUM_CLIP_JOINTS: usize = NUM_JOINTS + 1;
/// Columns of a raw motion row: root translation followed by a 6D rotation
/// per joint
pub const MOTION_WIDTH: usize = 3 + NUM_CLIP_JOINTS * 6;

/// Reads a raw motion ``[nr_frames, 315]`` from a ``.npy`` file. Files stored
/// as f64 are cast to f32
///
/// # Errors
/// Returns an error if the file cannot be read as a 2D float array
pub fn read_motion(path: &Path) -> Result<nd::Array2<f32>> {
    match read_npy::<_, nd::Array2<f32>>(path) {
        Ok(motion) => Ok(motion),
        Err(err_f32) => {
            #[allow(clippy::cast_possible_truncation)]
            let motion = read_npy::<_, nd::Array2<f64>>(path)
                .map(|motion| motion.mapv(|x| x as f32))
                .map_err(|_| MofeaError::NpyRead {
                    path: path.to_path_buf(),
                    source: err_f32,
                })?;
            Ok(motion)
        }
    }
}

/// One motion sequence split into its root translation and per joint 6D
/// rotations. The joints follow the SMPL-H layout.
#[derive(Clone, Debug)]
pub struct MotionClip {
    /// ``[nr_frames, 3]``
    pub root_trans: nd::Array2<f32>,
    /// ``[nr_frames, 312]``, kept flat as stored
    pub rot6d: nd::Array2<f32>,
}
impl MotionClip {
    /// # Panics
    /// Will panic if the motion is not ``[nr_frames, 315]``
    pub fn from_array(motion: &nd::Array2<f32>) -> Self {
        assert_eq!(
            motion.ncols(),
            MOTION_WIDTH,
            "A motion needs {MOTION_WIDTH} columns (translation + {NUM_CLIP_JOINTS} 6D rotations) but has shape {:?}",
            motion.shape()
        );
        Self {
            root_trans: motion.slice(s![.., 0..3]).to_owned(),
            rot6d: motion.slice(s![.., 3..]).to_owned(),
        }
    }

    /// # Errors
    /// Returns an error if the file cannot be read
    ///
    /// # Panics
    /// Will panic if the motion in the file is not ``[nr_frames, 315]``
    pub fn from_npy(path: &Path) -> Result<Self> {
        Ok(Self::from_array(&read_motion(path)?))
    }

    pub fn num_frames(&self) -> usize {
        self.root_trans.nrows()
    }

    /// Axis-angle rotations ``[nr_frames, 156]``
    pub fn decode_axis_angle(&self) -> nd::Array2<f32> {
        let nr_frames = self.num_frames();
        let per_joint = self
            .rot6d
            .to_shape((nr_frames, NUM_CLIP_JOINTS, 6))
            .expect("Row major clip rotations can be split per joint");
        ax_from_6v(&per_joint)
            .into_shape_with_order((nr_frames, NUM_CLIP_JOINTS * 3))
            .expect("Freshly decoded rotations are contiguous")
    }

    /// One SMPL-H pose per frame from the decoded axis angles
    ///
    /// # Panics
    /// Will panic if ``axis_angle`` does not have a row per frame
    pub fn to_poses(&self, axis_angle: &nd::Array2<f32>) -> Vec<Pose> {
        assert_eq!(axis_angle.nrows(), self.num_frames(), "Need one axis-angle row per frame");
        axis_angle
            .outer_iter()
            .zip(self.root_trans.outer_iter())
            .map(|(flat_pose, trans)| Pose::from_flat_axis_angle(flat_pose, trans, SmplType::SmplH))
            .collect()
    }
}
