use crate::common::{metadata::SmplMetadata, pose::Pose, pose_parts::PosePart, types::SmplType};
use enum_map::EnumMap;
use ndarray as nd;
use ndarray::prelude::*;
use strum::IntoEnumIterator;

/// ``Pose`` chunked into its parts so it can be re-assembled in the joint
/// layout of a different model type
#[derive(Debug)]
pub struct PoseChunked {
    pub global_trans: nd::Array1<f32>,
    /// ``[joints_in_part, 3]`` axis angles per part, ``None`` if the source model
    /// does not have that part
    pub parts: EnumMap<PosePart, Option<nd::Array2<f32>>>,
}

impl PoseChunked {
    pub fn new(pose: &Pose, metadata: &SmplMetadata) -> Self {
        let p2r = &metadata.parts2jointranges;
        let mut parts: EnumMap<PosePart, Option<nd::Array2<f32>>> = EnumMap::default();
        for part in PosePart::iter() {
            let range = p2r[part].clone();
            if !range.is_empty() && range.end <= pose.num_active_joints() {
                parts[part] = Some(pose.joint_poses.slice(s![range, ..]).to_owned());
            }
        }
        Self {
            global_trans: pose.global_trans.clone(),
            parts,
        }
    }

    /// # Panics
    /// Will panic if a chunk does not have the number of joints the
    /// destination model expects for that part
    pub fn to_pose(&self, metadata: &SmplMetadata, smpl_type: SmplType) -> Pose {
        let mut pose = Pose::new_empty(smpl_type);
        pose.global_trans.assign(&self.global_trans);
        for part in PosePart::iter() {
            let range = metadata.parts2jointranges[part].clone();
            if range.is_empty() {
                continue;
            }
            //face parts are never transferred and stay at rest
            if part.is_face() {
                continue;
            }
            if let Some(chunk) = &self.parts[part] {
                assert_eq!(
                    chunk.nrows(),
                    range.len(),
                    "Part {part:?} has {} joints but {smpl_type} expects {}",
                    chunk.nrows(),
                    range.len()
                );
                pose.joint_poses.slice_mut(s![range, ..]).assign(chunk);
            }
        }
        pose
    }
}
