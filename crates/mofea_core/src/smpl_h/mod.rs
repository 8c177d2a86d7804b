#[allow(clippy::module_inception)]
pub mod smpl_h;
pub mod smpl_h_pose_parts;
