use super::{
    clip::{MotionClip, MOTION_WIDTH, NUM_CLIP_JOINTS},
    contacts::{foot_contacts, TrailingFrame, FOOT_JOINT_IDX},
};
use crate::{
    common::{betas::Betas, expression::Expression, smpl_model::SmplModel},
    error::{MofeaError, Result},
};
use burn::prelude::Backend;
use log::{debug, info};
use mofea_utils::io::{clip_name, list_files_of_type, FileType};
use ndarray as nd;
use ndarray::prelude::*;
use ndarray_npy::write_npy;
use std::path::{Path, PathBuf};

/// How the rotations are written into the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureVariant {
    /// 6D rotations as stored in the input
    Rot6d,
    /// Rotations decoded to axis angles
    #[default]
    AxisAngle,
}
impl FeatureVariant {
    pub fn rotation_width(self) -> usize {
        match self {
            Self::Rot6d => NUM_CLIP_JOINTS * 6,
            Self::AxisAngle => NUM_CLIP_JOINTS * 3,
        }
    }
    /// Columns of one output row: contacts, root translation and rotations
    pub fn width(self) -> usize {
        FOOT_JOINT_IDX.len() + 3 + self.rotation_width()
    }
    pub fn default_output_dir(self) -> PathBuf {
        PathBuf::from(format!("./motion_fea{}", self.width()))
    }
}

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub variant: FeatureVariant,
    pub trailing_frame: TrailingFrame,
    pub num_betas: usize,
    pub num_expression_coeffs: usize,
    /// Frame rate of the clips. Only reported, clips are never resampled
    pub fps: f32,
}
impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            variant: FeatureVariant::default(),
            trailing_frame: TrailingFrame::default(),
            num_betas: 10,
            num_expression_coeffs: 10,
            fps: 30.0,
        }
    }
}

/// Turns motion clips into per-frame feature rows. Owns the body model for
/// the whole run, every clip is posed with a neutral shape and expression.
pub struct FeatureExtractor<B: Backend> {
    model: Box<dyn SmplModel<B>>,
    pub config: ExtractConfig,
    betas: Betas,
    expression: Expression,
}
impl<B: Backend> FeatureExtractor<B> {
    pub fn new(model: Box<dyn SmplModel<B>>, config: ExtractConfig) -> Self {
        let betas = Betas::new_empty(config.num_betas);
        let expression = Expression::new_empty(config.num_expression_coeffs);
        Self {
            model,
            config,
            betas,
            expression,
        }
    }

    /// Posed joints ``[nr_frames, nr_joints, 3]`` of the clip
    pub fn joint_positions(&self, clip: &MotionClip, axis_angle: &nd::Array2<f32>) -> nd::Array3<f32> {
        let poses = clip.to_poses(axis_angle);
        self.model.forward_sequence(&self.betas, Some(&self.expression), &poses)
    }

    /// Feature rows ``[nr_frames, width]`` of one clip
    ///
    /// # Panics
    /// Will panic if the assembled rows do not have the width of the variant
    pub fn extract(&self, clip: &MotionClip) -> nd::Array2<f32> {
        let axis_angle = clip.decode_axis_angle();
        let joints = self.joint_positions(clip, &axis_angle);
        debug!("Posed joints {:?}", joints.shape());
        let contacts = foot_contacts(&joints, self.config.trailing_frame);
        let rotations = match self.config.variant {
            FeatureVariant::Rot6d => clip.rot6d.view(),
            FeatureVariant::AxisAngle => axis_angle.view(),
        };
        let features = nd::concatenate(Axis(1), &[contacts.view(), clip.root_trans.view(), rotations])
            .expect("All parts have a row per frame");
        assert_eq!(
            features.ncols(),
            self.config.variant.width(),
            "Feature rows of variant {:?} must have {} columns",
            self.config.variant,
            self.config.variant.width()
        );
        features
    }

    /// Extracts the features of one ``.npy`` clip and writes them to
    /// ``output_dir`` under the clip name. Returns the written path
    ///
    /// # Errors
    /// Returns an error if the clip has no name, cannot be read or the
    /// features cannot be written
    pub fn process_file(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
        let name = clip_name(input).ok_or_else(|| MofeaError::InvalidClipName(input.to_path_buf()))?;
        let clip = MotionClip::from_npy(input)?;
        let features = self.extract(&clip);
        let output = output_dir.join(format!("{name}.npy"));
        debug!("{name}: motion {:?} -> features {:?}", [clip.num_frames(), MOTION_WIDTH], features.shape());
        write_npy(&output, &features).map_err(|source| MofeaError::NpyWrite {
            path: output.clone(),
            source,
        })?;
        Ok(output)
    }

    /// Processes every ``.npy`` directly inside ``input_dir`` in lexicographic
    /// order, hidden files and other extension cases are ignored. Stops at the
    /// first failing clip
    ///
    /// # Errors
    /// Returns an error if ``input_dir`` is not a directory, ``output_dir``
    /// cannot be created or any clip fails
    pub fn process_dir(&self, input_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
        if !input_dir.is_dir() {
            return Err(MofeaError::InvalidInputDir(input_dir.to_path_buf()));
        }
        std::fs::create_dir_all(output_dir).map_err(|e| MofeaError::io(output_dir, e))?;
        let inputs = list_files_of_type(input_dir, FileType::Npy).map_err(|e| MofeaError::io(input_dir, e))?;
        info!(
            "Extracting {:?} features ({} columns) of {} clips at {} fps into {}",
            self.config.variant,
            self.config.variant.width(),
            inputs.len(),
            self.config.fps,
            output_dir.display()
        );
        let mut outputs = Vec::with_capacity(inputs.len());
        for (idx, input) in inputs.iter().enumerate() {
            let output = self.process_file(input, output_dir)?;
            info!("[{}/{}] {}", idx + 1, inputs.len(), input.display());
            outputs.push(output);
        }
        Ok(outputs)
    }
}
