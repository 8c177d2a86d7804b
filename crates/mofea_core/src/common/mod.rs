pub mod betas;
pub mod expression;
pub mod metadata;
pub mod outputs;
pub mod pose;
pub mod pose_parts;
pub mod smpl_model;
pub mod types;
