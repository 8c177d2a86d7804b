use super::{pose_parts::PosePart, types::SmplType};
use crate::{
    smpl_h::{smpl_h, smpl_h_pose_parts},
    smpl_x::{smpl_x, smpl_x_pose_parts},
};
use enum_map::EnumMap;
use std::ops::Range;
#[derive(Default, Clone, Debug)]
pub struct SmplMetadata {
    /// number of joints excluding the root
    pub num_joints: usize,
    pub parts2jointranges: EnumMap<PosePart, Range<usize>>,
    pub joint_parents: Vec<u32>,
    pub joint_names: Vec<String>,
}
impl SmplMetadata {
    /// Number of rows a full pose of this model type has (root included)
    pub fn pose_rows(&self) -> usize {
        self.num_joints + 1
    }
}
pub fn smpl_metadata(smpl_type: &SmplType) -> SmplMetadata {
    match smpl_type {
        SmplType::SmplH => {
            let parts = smpl_h_pose_parts::PosePartRanges::empty();
            SmplMetadata {
                num_joints: smpl_h::NUM_JOINTS,
                parts2jointranges: parts.parts2jointranges,
                ..Default::default()
            }
        }
        SmplType::SmplX => {
            let parts = smpl_x_pose_parts::PosePartRanges::empty();
            SmplMetadata {
                num_joints: smpl_x::NUM_JOINTS,
                parts2jointranges: parts.parts2jointranges,
                joint_parents: smpl_x::PARENT_ID_PER_JOINT.to_vec(),
                joint_names: smpl_x::JOINT_NAMES.map(std::string::ToString::to_string).to_vec(),
            }
        }
    }
}
