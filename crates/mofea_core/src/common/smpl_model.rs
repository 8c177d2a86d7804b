use super::{
    betas::Betas,
    expression::Expression,
    outputs::SmplOutputDynamic,
    pose::Pose,
    types::SmplType,
};
use burn::{
    prelude::Backend,
    tensor::{Float, Tensor},
};
use mofea_utils::bshare::{tensor_to_array2, ToBurn};
use ndarray as nd;
/// Trait for a Smpl based model that can be posed by forward kinematics.
/// Mofea expects the body model handed to the feature extraction to
/// implement this.
pub trait SmplModel<B: Backend> {
    fn smpl_type(&self) -> SmplType;
    fn device(&self) -> B::Device;
    fn betas2verts(&self, betas: &Betas) -> Tensor<B, 2, Float>;
    fn expression2offsets(&self, expression: &Expression) -> Tensor<B, 2, Float>;
    fn verts2joints(&self, verts_t_pose: Tensor<B, 2, Float>) -> Tensor<B, 2, Float>;
    /// Poses the rest joints ``[nr_joints, 3]`` with ``pose`` and adds its
    /// global translation
    fn apply_pose(&self, joints_t_pose: &nd::Array2<f32>, pose: &Pose) -> nd::Array2<f32>;

    /// Rest joints for a certain shape and expression
    fn joints_t_pose(&self, betas: &Betas, expression: Option<&Expression>) -> nd::Array2<f32> {
        let mut verts_t_pose = self.betas2verts(betas);
        if let Some(expression) = expression {
            verts_t_pose = verts_t_pose + self.expression2offsets(expression);
        }
        tensor_to_array2(&self.verts2joints(verts_t_pose))
    }

    fn forward(&self, betas: &Betas, pose: &Pose, expression: Option<&Expression>) -> SmplOutputDynamic<B> {
        let joints_t_pose = self.joints_t_pose(betas, expression);
        let joints = self.apply_pose(&joints_t_pose, pose);
        SmplOutputDynamic {
            joints: joints.to_burn(&self.device()),
        }
    }

    /// Poses a whole sequence with a single shape and expression. Returns
    /// the posed joints ``[nr_frames, nr_joints, 3]``
    fn forward_sequence(&self, betas: &Betas, expression: Option<&Expression>, poses: &[Pose]) -> nd::Array3<f32> {
        let joints_t_pose = self.joints_t_pose(betas, expression);
        let nr_joints = joints_t_pose.nrows();
        let mut per_frame_joints = nd::Array3::<f32>::zeros((poses.len(), nr_joints, 3));
        for (pose, mut frame_joints) in poses.iter().zip(per_frame_joints.axis_iter_mut(nd::Axis(0))) {
            frame_joints.assign(&self.apply_pose(&joints_t_pose, pose));
        }
        per_frame_joints
    }
}
