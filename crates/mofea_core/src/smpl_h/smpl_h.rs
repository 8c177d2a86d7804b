//! Joint layout of SMPL-H, which is the layout the 6D rotations of the motion
//! clips are stored in: root, 21 body joints, then 15 joints per hand
pub const NUM_BODY_JOINTS: usize = 21;
pub const NUM_HAND_JOINTS: usize = 15;
pub const NUM_JOINTS: usize = NUM_BODY_JOINTS + 2 * NUM_HAND_JOINTS;
