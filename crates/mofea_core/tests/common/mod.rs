use burn::backend::NdArray;
use mofea_core::{
    common::types::Gender,
    smpl_x::{smpl_x::PARENT_ID_PER_JOINT, smpl_x_gpu::SmplXGPU},
};
use ndarray as nd;
use std::path::Path;

pub const NUM_SMPLX_JOINTS: usize = 55;
pub const IDENTITY_6D: [f32; 6] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];

/// SMPL-X topology model whose vertices are its joints. Every joint hangs
/// 10cm below the previous one and is offset sideways so the chain is not
/// degenerate
pub fn synthetic_smplx() -> SmplXGPU<NdArray> {
    let template = nd::Array2::from_shape_fn((NUM_SMPLX_JOINTS, 3), |(j, c)| match c {
        0 => 0.01 * (j % 5) as f32,
        1 => -0.1 * j as f32,
        _ => 0.0,
    });
    let shape_dirs = nd::Array3::from_shape_fn((NUM_SMPLX_JOINTS, 3, 10), |(_, c, b)| if c == 1 && b == 0 { 0.1 } else { 0.0 });
    let regressor = nd::Array2::<f32>::eye(NUM_SMPLX_JOINTS);
    SmplXGPU::new_from_matrices(Gender::Neutral, &template, &shape_dirs, None, &regressor, &PARENT_ID_PER_JOINT, 10, 10)
}

/// ``[nr_frames, 315]`` motion with identity rotations and the translation
/// given per frame
pub fn motion_with_trans(trans: impl Fn(usize) -> [f32; 3], nr_frames: usize) -> nd::Array2<f32> {
    nd::Array2::from_shape_fn((nr_frames, 315), |(t, c)| if c < 3 { trans(t)[c] } else { IDENTITY_6D[(c - 3) % 6] })
}

pub fn write_motion(dir: &Path, file_name: &str, motion: &nd::Array2<f32>) {
    ndarray_npy::write_npy(dir.join(file_name), motion).unwrap();
}
