use ndarray as nd;
use ndarray::prelude::*;
use std::ops::SubAssign;

/// Calculates the rotation matrices for a batch of rotation vectors of shape
/// ``[nr_joints, 3]``. Returns ``[nr_joints, 3, 3]``
pub fn batch_rodrigues(full_pose: &nd::Array2<f32>) -> nd::Array3<f32> {
    let mut rotations_per_join = nd::Array3::<f32>::zeros((full_pose.nrows(), 3, 3));
    let identity = nd::Array2::<f32>::eye(3);

    for (idx, v) in full_pose.axis_iter(nd::Axis(0)).enumerate() {
        let angle = v.iter().map(|x| x * x).sum::<f32>().sqrt(); //l2 norm

        let rot_dir = v.to_owned() / (angle + 1e-6);
        let cos = angle.cos();
        let sin = angle.sin();

        let (rx, ry, rz) = (rot_dir[0], rot_dir[1], rot_dir[2]);

        let k = array![[0.0, -rz, ry], [rz, 0.0, -rx], [-ry, rx, 0.0]];
        let rot_mat = &identity + &(sin * &k) + (1.0 - cos) * k.dot(&k);
        rotations_per_join.slice_mut(s![idx, .., ..]).assign(&rot_mat);
    }

    rotations_per_join
}

/// Poses the rest joints by walking the kinematic tree. ``parent_idx_per_joint``
/// must list parents before children, the entry of the root (index 0) is
/// ignored. Returns the posed joint positions ``[nr_joints, 3]``
///
/// # Panics
/// Will panic if the number of parents, rotations and joints differ
pub fn batch_rigid_transform(parent_idx_per_joint: &[u32], rot_mats: &nd::Array3<f32>, joints: &nd::Array2<f32>) -> nd::Array2<f32> {
    let num_joints = joints.nrows();
    assert_eq!(parent_idx_per_joint.len(), num_joints, "Need one parent per joint");
    assert_eq!(rot_mats.dim().0, num_joints, "Need one rotation per joint");

    // rel_joints[1:] -= joints[parents[1:]]
    let mut rel_joints = joints.clone();
    for (idx_cur, &idx_parent) in parent_idx_per_joint.iter().enumerate().skip(1) {
        rel_joints.row_mut(idx_cur).sub_assign(&joints.row(idx_parent as usize));
    }

    let mut transform_chain: Vec<nd::Array2<f32>> = Vec::with_capacity(num_joints);
    for idx in 0..num_joints {
        let mut local = nd::Array2::<f32>::eye(4);
        local.slice_mut(s![0..3, 0..3]).assign(&rot_mats.slice(s![idx, .., ..]));
        local.slice_mut(s![0..3, 3]).assign(&rel_joints.row(idx));
        let global = if idx == 0 {
            local
        } else {
            let parent = parent_idx_per_joint[idx] as usize;
            assert!(parent < idx, "Joint {idx} has parent {parent} which is not posed yet");
            transform_chain[parent].dot(&local)
        };
        transform_chain.push(global);
    }

    //get posed joints as just the translation part of the transform chain
    let mut posed_joints = nd::Array2::<f32>::zeros((num_joints, 3));
    for (i, tf) in transform_chain.iter().enumerate() {
        posed_joints.row_mut(i).assign(&tf.slice(s![0..3, 3]));
    }
    posed_joints
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn rodrigues_zero_is_identity() {
        let rot = batch_rodrigues(&nd::Array2::zeros((3, 3)));
        for r in rot.axis_iter(nd::Axis(0)) {
            assert_abs_diff_eq!(r, nd::Array2::<f32>::eye(3), epsilon = 1e-6);
        }
    }

    #[test]
    fn rodrigues_quarter_turn_about_z() {
        let rot = batch_rodrigues(&array![[0.0, 0.0, FRAC_PI_2]]);
        let x = array![1.0_f32, 0.0, 0.0];
        let rot_z: nd::ArrayView2<f32> = rot.slice(s![0, .., ..]);
        let rotated = rot_z.dot(&x);
        assert_abs_diff_eq!(rotated, array![0.0, 1.0, 0.0], epsilon = 1e-5);
    }

    #[test]
    fn rigid_transform_rotates_children_around_parent() {
        //chain root -> a -> b along x
        let joints = array![[0.0_f32, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
        let parents = [u32::MAX, 0, 1];
        let rot_mats = batch_rodrigues(&array![[0.0, 0.0, FRAC_PI_2], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        let posed = batch_rigid_transform(&parents, &rot_mats, &joints);
        assert_abs_diff_eq!(posed, array![[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 2.0, 0.0]], epsilon = 1e-5);
    }

    #[test]
    fn rigid_transform_identity_keeps_rest_pose() {
        let joints = array![[0.1_f32, 0.9, 0.0], [0.2, 0.5, 0.1], [0.2, 0.1, 0.1]];
        let rot_mats = batch_rodrigues(&nd::Array2::zeros((3, 3)));
        let posed = batch_rigid_transform(&[u32::MAX, 0, 1], &rot_mats, &joints);
        assert_abs_diff_eq!(posed, joints, epsilon = 1e-6);
    }
}
