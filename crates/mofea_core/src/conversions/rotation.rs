//! Conversions between quaternions, axis angles, rotation matrices and the
//! continuous 6D rotation representation.
//!
//! The batched functions accept arrays of any dimensionality. The last axis
//! holds the components of one rotation and every leading axis is a batch
//! axis, so a ``[nr_frames, nr_joints, 6]`` array decodes to
//! ``[nr_frames, nr_joints, 3]`` axis angles.
//!
//! Quaternions are stored as ``(w, x, y, z)``. The 6D representation is the
//! first two rows of the rotation matrix, flattened.
use nalgebra as na;
use ndarray as nd;

/// Normalizes a vector, clamping the norm from below so a zero vector stays
/// zero instead of producing NaNs
fn normalize_eps(v: &na::Vector3<f32>) -> na::Vector3<f32> {
    v / v.norm().max(1e-12)
}

/// Rotation matrix of a quaternion ``(w, x, y, z)``. The quaternion does not
/// need to be of unit length
pub fn quaternion_to_matrix(q: [f32; 4]) -> na::Matrix3<f32> {
    let quat = na::UnitQuaternion::from_quaternion(na::Quaternion::new(q[0], q[1], q[2], q[3]));
    quat.to_rotation_matrix().into_inner()
}

/// A degenerate (all zero) matrix maps to the identity
fn matrix_to_unit_quaternion(m: &na::Matrix3<f32>) -> na::UnitQuaternion<f32> {
    if m.norm() < 1e-12 {
        return na::UnitQuaternion::identity();
    }
    let q = na::UnitQuaternion::from_rotation_matrix(&na::Rotation3::from_matrix_unchecked(*m));
    na::UnitQuaternion::new_normalize(*q.quaternion())
}

/// Quaternion ``(w, x, y, z)`` of a rotation matrix, with a non-negative real
/// part
pub fn matrix_to_quaternion(m: &na::Matrix3<f32>) -> [f32; 4] {
    let q = matrix_to_unit_quaternion(m);
    let sign = if q.w < 0.0 { -1.0 } else { 1.0 };
    [sign * q.w, sign * q.i, sign * q.j, sign * q.k]
}

pub fn axis_angle_to_matrix(axis_angle: [f32; 3]) -> na::Matrix3<f32> {
    na::Rotation3::new(na::Vector3::from(axis_angle)).into_inner()
}

/// Axis angle of a rotation matrix, the angle is in ``[0, pi]``
pub fn matrix_to_axis_angle(m: &na::Matrix3<f32>) -> [f32; 3] {
    //going through the quaternion keeps the axis well defined at a half turn
    let scaled_axis = matrix_to_unit_quaternion(m).scaled_axis();
    [scaled_axis.x, scaled_axis.y, scaled_axis.z]
}

pub fn matrix_to_rotation_6d(m: &na::Matrix3<f32>) -> [f32; 6] {
    [m[(0, 0)], m[(0, 1)], m[(0, 2)], m[(1, 0)], m[(1, 1)], m[(1, 2)]]
}

/// Rebuilds an orthonormal rotation matrix from its 6D representation with
/// Gram-Schmidt. The input rows do not have to be normalized or orthogonal
pub fn rotation_6d_to_matrix(d6: [f32; 6]) -> na::Matrix3<f32> {
    let a1 = na::Vector3::new(d6[0], d6[1], d6[2]);
    let a2 = na::Vector3::new(d6[3], d6[4], d6[5]);
    let b1 = normalize_eps(&a1);
    let b2 = normalize_eps(&(a2 - b1.dot(&a2) * b1));
    let b3 = b1.cross(&b2);
    na::Matrix3::from_rows(&[b1.transpose(), b2.transpose(), b3.transpose()])
}

/// Applies ``convert`` to every lane along the last axis, changing its length
/// from ``N`` to ``M``
///
/// # Panics
/// Will panic if the last dimension is not ``N``
fn map_last_axis<S, D, F, const N: usize, const M: usize>(input: &nd::ArrayBase<S, D>, convert: F) -> nd::Array<f32, D>
where
    S: nd::Data<Elem = f32>,
    D: nd::Dimension,
    F: Fn([f32; N]) -> [f32; M],
{
    assert!(
        input.shape().last() == Some(&N),
        "Expected the last dimension to be {N} but the array has shape {:?}",
        input.shape()
    );
    let mut values = Vec::with_capacity(input.len() / N * M);
    for lane in input.rows() {
        let mut components = [0.0; N];
        for (dst, src) in components.iter_mut().zip(lane.iter()) {
            *dst = *src;
        }
        values.extend_from_slice(&convert(components));
    }
    let mut dim = input.raw_dim();
    let last = dim.ndim() - 1;
    dim[last] = M;
    nd::Array::from_shape_vec(dim, values).expect("One output lane is produced per input lane")
}

/// ``[..., 4]`` quaternions to ``[..., 6]``
///
/// # Panics
/// Will panic if the last dimension is not 4
pub fn quat_to_6v<S, D>(q: &nd::ArrayBase<S, D>) -> nd::Array<f32, D>
where
    S: nd::Data<Elem = f32>,
    D: nd::Dimension,
{
    map_last_axis(q, |q: [f32; 4]| matrix_to_rotation_6d(&quaternion_to_matrix(q)))
}

/// ``[..., 6]`` to ``[..., 4]`` quaternions
///
/// # Panics
/// Will panic if the last dimension is not 6
pub fn quat_from_6v<S, D>(d6: &nd::ArrayBase<S, D>) -> nd::Array<f32, D>
where
    S: nd::Data<Elem = f32>,
    D: nd::Dimension,
{
    map_last_axis(d6, |d6: [f32; 6]| matrix_to_quaternion(&rotation_6d_to_matrix(d6)))
}

/// ``[..., 3]`` axis angles to ``[..., 6]``
///
/// # Panics
/// Will panic if the last dimension is not 3
pub fn ax_to_6v<S, D>(axis_angle: &nd::ArrayBase<S, D>) -> nd::Array<f32, D>
where
    S: nd::Data<Elem = f32>,
    D: nd::Dimension,
{
    map_last_axis(axis_angle, |aa: [f32; 3]| matrix_to_rotation_6d(&axis_angle_to_matrix(aa)))
}

/// ``[..., 6]`` to ``[..., 3]`` axis angles
///
/// # Panics
/// Will panic if the last dimension is not 6
pub fn ax_from_6v<S, D>(d6: &nd::ArrayBase<S, D>) -> nd::Array<f32, D>
where
    S: nd::Data<Elem = f32>,
    D: nd::Dimension,
{
    map_last_axis(d6, |d6: [f32; 6]| matrix_to_axis_angle(&rotation_6d_to_matrix(d6)))
}
