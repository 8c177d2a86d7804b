use super::{metadata::smpl_metadata, types::SmplType};
use ndarray as nd;
/// One frame of a body pose: an axis-angle rotation per joint plus the
/// global translation of the root
#[derive(Clone, Debug)]
pub struct Pose {
    /// ``[nr_joints, 3]``, root rotation in the first row
    pub joint_poses: nd::Array2<f32>,
    pub global_trans: nd::Array1<f32>,
    pub smpl_type: SmplType,
}
impl Pose {
    /// # Panics
    /// Will panic if the number of joints does not match ``smpl_type`` or the
    /// translation is not a 3-vector
    pub fn new(joint_poses: nd::Array2<f32>, global_trans: nd::Array1<f32>, smpl_type: SmplType) -> Self {
        let metadata = smpl_metadata(&smpl_type);
        assert_eq!(
            joint_poses.dim(),
            (metadata.pose_rows(), 3),
            "A {smpl_type} pose needs {} joints with 3 axis-angle components",
            metadata.pose_rows()
        );
        assert_eq!(global_trans.len(), 3, "The global translation needs 3 components");
        Self {
            joint_poses,
            global_trans,
            smpl_type,
        }
    }
    pub fn new_empty(smpl_type: SmplType) -> Self {
        let metadata = smpl_metadata(&smpl_type);
        let joint_poses = nd::Array2::<f32>::zeros((metadata.pose_rows(), 3));
        let global_trans = nd::Array1::<f32>::zeros(3);
        Self {
            joint_poses,
            global_trans,
            smpl_type,
        }
    }
    /// Create a pose from a flat ``[nr_joints * 3]`` axis-angle row
    ///
    /// # Panics
    /// Will panic if the row length does not match ``smpl_type``
    pub fn from_flat_axis_angle(flat_pose: nd::ArrayView1<f32>, global_trans: nd::ArrayView1<f32>, smpl_type: SmplType) -> Self {
        let nr_joints = flat_pose.len() / 3;
        assert_eq!(flat_pose.len(), nr_joints * 3, "Flat axis-angle pose must have a multiple of 3 values");
        let joint_poses = flat_pose
            .to_owned()
            .into_shape_with_order((nr_joints, 3))
            .expect("Contiguous array can always be reshaped");
        Self::new(joint_poses, global_trans.to_owned(), smpl_type)
    }
    pub fn num_active_joints(&self) -> usize {
        self.joint_poses.dim().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn flat_pose_is_split_per_joint() {
        let flat = Array1::from_iter((0..156).map(|x| x as f32));
        let trans = Array1::from_vec(vec![1.0, 2.0, 3.0]);
        let pose = Pose::from_flat_axis_angle(flat.view(), trans.view(), SmplType::SmplH);
        assert_eq!(pose.num_active_joints(), 52);
        assert_eq!(pose.joint_poses.row(1).to_vec(), vec![3.0, 4.0, 5.0]);
        assert_eq!(pose.global_trans, trans);
    }

    #[test]
    #[should_panic(expected = "needs 55 joints")]
    fn smplx_pose_rejects_smplh_layout() {
        let flat = Array1::<f32>::zeros(156);
        let trans = Array1::<f32>::zeros(3);
        let _ = Pose::from_flat_axis_angle(flat.view(), trans.view(), SmplType::SmplX);
    }
}
