#[allow(clippy::module_inception)]
pub mod smpl_x;
pub mod smpl_x_gpu;
pub mod smpl_x_pose_parts;
