use ndarray as nd;
use num_traits;

//ndarray has no fancy indexing, so gathers are done by hand
pub trait Gather3D<T: nd::ScalarOperand + num_traits::identities::Zero + Copy> {
    fn gather(&self, indices_rows: &[usize], indices_cols: &[usize], indices_depth: &[usize]) -> nd::Array3<T>; //equivalent of python dst=src[indices_rows][:, indices_cols][:, :, indices_depth]
}
impl<T: nd::ScalarOperand + num_traits::identities::Zero + Copy> Gather3D<T> for nd::Array3<T> {
    fn gather(&self, indices_rows: &[usize], indices_cols: &[usize], indices_depth: &[usize]) -> nd::Array3<T> {
        let mut res = nd::Array3::zeros((indices_rows.len(), indices_cols.len(), indices_depth.len()));
        for (i_out, &i_in) in indices_rows.iter().enumerate() {
            for (j_out, &j_in) in indices_cols.iter().enumerate() {
                for (k_out, &k_in) in indices_depth.iter().enumerate() {
                    res[(i_out, j_out, k_out)] = self[(i_in, j_in, k_in)];
                }
            }
        }
        res
    }
}

/// Gathers a subset of joints for every frame of a `(nr_frames, nr_joints, C)` array
pub fn gather_joints<T: nd::ScalarOperand + num_traits::identities::Zero + Copy>(per_frame_joints: &nd::Array3<T>, joint_indices: &[usize]) -> nd::Array3<T> {
    let (nr_frames, _, nr_channels) = per_frame_joints.dim();
    let frames: Vec<usize> = (0..nr_frames).collect();
    let channels: Vec<usize> = (0..nr_channels).collect();
    per_frame_joints.gather(&frames, joint_indices, &channels)
}
