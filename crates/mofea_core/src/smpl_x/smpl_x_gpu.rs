use crate::{
    common::{
        betas::Betas,
        expression::Expression,
        pose::Pose,
        smpl_model::SmplModel,
        types::{Gender, SmplType},
    },
    conversions::pose_remap::PoseRemap,
    error::{MofeaError, Result},
    smpl_x::smpl_x::{EXPRESSION_SPACE_DIM, NUM_JOINTS, SHAPE_SPACE_DIM},
};
use burn::tensor::{backend::Backend, Float, Tensor};
use log::{debug, info, warn};
use mofea_utils::{
    bshare::ToBurn,
    numerical::{batch_rigid_transform, batch_rodrigues},
};
use ndarray as nd;
use ndarray::prelude::*;
use ndarray_npy::NpzReader;
use std::{
    io::{Read, Seek},
    path::Path,
};

/// Reads a float array from the npz, accepting both f32 and f64 storage
fn read_npz_f32<R: Read + Seek, D: nd::Dimension>(npz: &mut NpzReader<R>, name: &str) -> Result<nd::Array<f32, D>> {
    match npz.by_name::<nd::OwnedRepr<f32>, D>(name) {
        Ok(arr) => Ok(arr),
        Err(err_f32) => {
            #[allow(clippy::cast_possible_truncation)]
            let arr = npz
                .by_name::<nd::OwnedRepr<f64>, D>(name)
                .map(|arr| arr.mapv(|x| x as f32))
                .map_err(|_| MofeaError::NpzRead {
                    name: name.to_string(),
                    source: err_f32,
                })?;
            Ok(arr)
        }
    }
}

/// Reads the first row of ``kintree_table`` which holds the parent of every
/// joint. It is stored as signed or unsigned ints depending on the exporter
fn read_kintree_parents<R: Read + Seek>(npz: &mut NpzReader<R>) -> Result<Vec<u32>> {
    let name = "kintree_table";
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let table: nd::Array2<u32> = match npz.by_name::<nd::OwnedRepr<i64>, Ix2>(name) {
        Ok(table) => table.mapv(|x| x as u32),
        Err(err_i64) => match npz.by_name::<nd::OwnedRepr<i32>, Ix2>(name) {
            Ok(table) => table.mapv(|x| x as u32),
            Err(_) => npz.by_name::<nd::OwnedRepr<u32>, Ix2>(name).map_err(|_| MofeaError::NpzRead {
                name: name.to_string(),
                source: err_i64,
            })?,
        },
    };
    Ok(table.row(0).to_vec())
}

/// SMPL-X body model evaluated with burn for the shape blending and with
/// ndarray for the kinematic chain. Only joints are computed, there is no
/// skinning of the mesh.
#[derive(Clone)]
pub struct SmplXGPU<B: Backend> {
    pub device: B::Device,
    pub smpl_type: SmplType,
    pub gender: Gender,
    pub num_verts: usize,
    pub verts_template: Tensor<B, 2, Float>,
    /// ``[num_verts * 3, num_betas]``
    pub shape_dirs: Tensor<B, 2, Float>,
    /// ``[num_verts * 3, num_expression_components]``
    pub expression_dirs: Option<Tensor<B, 2, Float>>,
    /// ``[NUM_JOINTS + 1, num_verts]``
    pub joint_regressor: Tensor<B, 2, Float>,
    pub parent_idx_per_joint: Vec<u32>,
}
impl<B: Backend> SmplXGPU<B> {
    /// # Panics
    /// Will panic if the matrices don't match the expected sizes
    #[allow(clippy::too_many_arguments)]
    pub fn new_from_matrices(
        gender: Gender,
        verts_template: &nd::Array2<f32>,
        shape_dirs: &nd::Array3<f32>,
        expression_dirs: Option<&nd::Array3<f32>>,
        joint_regressor: &nd::Array2<f32>,
        parent_idx_per_joint: &[u32],
        max_num_betas: usize,
        max_num_expression_components: usize,
    ) -> Self {
        let device = B::Device::default();
        let num_verts = verts_template.nrows();
        assert_eq!(verts_template.ncols(), 3, "Template vertices must be 3D");
        assert_eq!(
            joint_regressor.dim(),
            (NUM_JOINTS + 1, num_verts),
            "The joint regressor must map the {num_verts} vertices to {} joints",
            NUM_JOINTS + 1
        );
        assert_eq!(parent_idx_per_joint.len(), NUM_JOINTS + 1, "Need one parent per joint");
        let flatten_dirs = |dirs: &nd::Array3<f32>, max_components: usize| -> nd::Array2<f32> {
            assert_eq!(dirs.dim().0, num_verts, "Blend shapes must cover every vertex");
            let actual_components = max_components.min(dirs.dim().2);
            dirs.slice_axis(Axis(2), nd::Slice::from(0..actual_components))
                .to_owned()
                .into_shape_with_order((num_verts * 3, actual_components))
                .expect("Owned slice is contiguous")
        };
        let b_shape_dirs: Tensor<B, 2, Float> = flatten_dirs(shape_dirs, max_num_betas).to_burn(&device);
        let b_expression_dirs: Option<Tensor<B, 2, Float>> = expression_dirs.map(|dirs| flatten_dirs(dirs, max_num_expression_components).to_burn(&device));
        info!("Initialised burn on Backend: {:?}", B::name());
        debug!("Device: {:?}", &device);
        Self {
            smpl_type: SmplType::SmplX,
            gender,
            num_verts,
            verts_template: verts_template.to_burn(&device),
            shape_dirs: b_shape_dirs,
            expression_dirs: b_expression_dirs,
            joint_regressor: joint_regressor.to_burn(&device),
            parent_idx_per_joint: parent_idx_per_joint.to_vec(),
            device,
        }
    }
    fn new_from_npz_reader<R: Read + Seek>(
        npz: &mut NpzReader<R>,
        gender: Gender,
        max_num_betas: usize,
        max_num_expression_components: usize,
    ) -> Result<Self> {
        let verts_template: nd::Array2<f32> = read_npz_f32(npz, "v_template")?;
        let full_shape_dirs: nd::Array3<f32> = read_npz_f32(npz, "shapedirs")?;
        //expressions are either stored on their own or appended to the shape space
        let (shape_dirs, expression_dirs) = if let Ok(expression_dirs) = read_npz_f32::<_, Ix3>(npz, "expressiondirs") {
            (full_shape_dirs, Some(expression_dirs))
        } else {
            let num_available = full_shape_dirs.dim().2;
            let num_betas_to_use = SHAPE_SPACE_DIM.min(num_available);
            let shape_dirs = full_shape_dirs.slice_axis(Axis(2), nd::Slice::from(0..num_betas_to_use)).to_owned();
            let expression_dirs = if num_available > SHAPE_SPACE_DIM {
                let end = num_available.min(SHAPE_SPACE_DIM + EXPRESSION_SPACE_DIM);
                Some(full_shape_dirs.slice_axis(Axis(2), nd::Slice::from(SHAPE_SPACE_DIM..end)).to_owned())
            } else {
                None
            };
            (shape_dirs, expression_dirs)
        };
        if expression_dirs.is_none() {
            warn!("No expression dirs loaded from npz, expressions will have no effect");
        }
        let joint_regressor: nd::Array2<f32> = read_npz_f32(npz, "J_regressor")?;
        let parent_idx_per_joint = read_kintree_parents(npz)?;
        Ok(Self::new_from_matrices(
            gender,
            &verts_template,
            &shape_dirs,
            expression_dirs.as_ref(),
            &joint_regressor,
            &parent_idx_per_joint,
            max_num_betas,
            max_num_expression_components,
        ))
    }
    /// Loads a SMPL-X model from an ``.npz`` file
    ///
    /// # Errors
    /// Returns an error if the file does not exist or lacks one of the arrays
    /// ``v_template``, ``shapedirs``, ``J_regressor`` or ``kintree_table``
    pub fn new_from_npz(model_path: &Path, gender: Gender, max_num_betas: usize, max_num_expression_components: usize) -> Result<Self> {
        if !model_path.exists() {
            return Err(MofeaError::MissingModel(model_path.to_path_buf()));
        }
        info!("Loading SMPL-X ({gender}) from {}", model_path.display());
        let file = std::fs::File::open(model_path).map_err(|e| MofeaError::io(model_path, e))?;
        Self::new_from_reader(file, gender, max_num_betas, max_num_expression_components)
    }
    /// # Errors
    /// Returns an error if the reader is not a npz archive with the SMPL-X arrays
    pub fn new_from_reader<R: Read + Seek>(reader: R, gender: Gender, max_num_betas: usize, max_num_expression_components: usize) -> Result<Self> {
        let mut npz = NpzReader::new(reader).map_err(|source| MofeaError::NpzRead {
            name: "<archive>".to_string(),
            source,
        })?;
        Self::new_from_npz_reader(&mut npz, gender, max_num_betas, max_num_expression_components)
    }
}
impl<B: Backend> SmplModel<B> for SmplXGPU<B> {
    fn smpl_type(&self) -> SmplType {
        self.smpl_type
    }
    fn device(&self) -> B::Device {
        self.device.clone()
    }
    fn betas2verts(&self, betas: &Betas) -> Tensor<B, 2, Float> {
        let model_nr_betas = self.shape_dirs.dims()[1];
        let nr_betas = betas.betas.len().min(model_nr_betas);
        if nr_betas == 0 {
            return self.verts_template.clone();
        }
        let betas_tensor: Tensor<B, 1, Float> = betas.betas.slice(s![0..nr_betas]).to_burn(&self.device);
        let shape_dirs_sliced = self.shape_dirs.clone().slice([0..self.num_verts * 3, 0..nr_betas]);
        let v_beta_offsets = shape_dirs_sliced.matmul(betas_tensor.reshape([nr_betas, 1]));
        v_beta_offsets.reshape([self.num_verts, 3]).add(self.verts_template.clone())
    }
    fn expression2offsets(&self, expression: &Expression) -> Tensor<B, 2, Float> {
        let Some(expression_dirs) = &self.expression_dirs else {
            return Tensor::<B, 2, Float>::zeros([self.num_verts, 3], &self.device);
        };
        let nr_coeffs = expression.expr_coeffs.len().min(expression_dirs.dims()[1]);
        if nr_coeffs == 0 {
            return Tensor::<B, 2, Float>::zeros([self.num_verts, 3], &self.device);
        }
        let expr_tensor: Tensor<B, 1, Float> = expression.expr_coeffs.slice(s![0..nr_coeffs]).to_burn(&self.device);
        let expression_dirs_sliced = expression_dirs.clone().slice([0..self.num_verts * 3, 0..nr_coeffs]);
        let v_expr_offsets = expression_dirs_sliced.matmul(expr_tensor.reshape([nr_coeffs, 1]));
        v_expr_offsets.reshape([self.num_verts, 3])
    }
    fn verts2joints(&self, verts_t_pose: Tensor<B, 2, Float>) -> Tensor<B, 2, Float> {
        self.joint_regressor.clone().matmul(verts_t_pose)
    }
    /// # Panics
    /// Will panic if the pose cannot be remapped to the SMPL-X joints
    fn apply_pose(&self, joints_t_pose: &nd::Array2<f32>, pose_raw: &Pose) -> nd::Array2<f32> {
        let pose = PoseRemap::new(pose_raw.smpl_type, SmplType::SmplX).remap(pose_raw);
        assert!(
            pose.num_active_joints() == NUM_JOINTS + 1,
            "The pose does not have the correct number of joints for this model. {:?} != {:?}",
            pose.num_active_joints(),
            NUM_JOINTS + 1
        );
        let rot_mats = batch_rodrigues(&pose.joint_poses);
        let posed_joints = batch_rigid_transform(&self.parent_idx_per_joint, &rot_mats, joints_t_pose);
        posed_joints + &pose.global_trans.view().insert_axis(Axis(0))
    }
}
