pub mod pose_chunked;
pub mod pose_remap;
pub mod rotation;
pub mod slerp;
