use ndarray as nd;

/// Below this distance from parallel the quaternions are blended linearly
/// since ``sin(omega)`` is too close to zero
const LINEAR_THRESHOLD: f32 = 0.01;

/// Spherical linear interpolation between two batches of quaternions
/// ``[..., 4]`` of the same shape, with proportion ``a``. ``a`` is broadcast
/// (numpy rules) against the batch shape, i.e. the shape of ``x`` without its
/// last axis. For per-frame weights on ``[nr_frames, nr_joints, 4]`` pass ``a``
/// with shape ``[nr_frames, 1]``.
///
/// Where the dot product of the two quaternions is negative ``y`` is negated
/// so the interpolation follows the short arc.
///
/// # Panics
/// Will panic if ``x`` and ``y`` differ in shape, their last dimension is not
/// 4 or ``a`` cannot be broadcast to the batch shape
pub fn quat_slerp<S1, S2, S3, D, E>(x: &nd::ArrayBase<S1, D>, y: &nd::ArrayBase<S2, D>, a: &nd::ArrayBase<S3, E>) -> nd::Array<f32, D>
where
    S1: nd::Data<Elem = f32>,
    S2: nd::Data<Elem = f32>,
    S3: nd::Data<Elem = f32>,
    D: nd::Dimension,
    E: nd::Dimension,
{
    assert_eq!(x.shape(), y.shape(), "Both quaternion batches must have the same shape");
    assert!(
        x.shape().last() == Some(&4),
        "Expected the last dimension to be 4 but the array has shape {:?}",
        x.shape()
    );
    let batch_shape = &x.shape()[..x.ndim() - 1];
    let a = a
        .broadcast(nd::IxDyn(batch_shape))
        .unwrap_or_else(|| panic!("Weights of shape {:?} cannot be broadcast to {batch_shape:?}", a.shape()));

    let mut values = Vec::with_capacity(x.len());
    for ((qx, qy), &weight) in x.rows().into_iter().zip(y.rows()).zip(a.iter()) {
        let dot = qx.dot(&qy);
        //select instead of mutating y in place, flips dot and y together
        let sign = if dot < 0.0 { -1.0 } else { 1.0 };
        let len = sign * dot;

        let (amount0, amount1) = if 1.0 - len < LINEAR_THRESHOLD {
            (1.0 - weight, weight)
        } else {
            let omega = len.acos();
            let sin_omega = omega.sin();
            (((1.0 - weight) * omega).sin() / sin_omega, (weight * omega).sin() / sin_omega)
        };

        for (cx, cy) in qx.iter().zip(qy.iter()) {
            values.push(amount0 * cx + amount1 * sign * cy);
        }
    }
    nd::Array::from_shape_vec(x.raw_dim(), values).expect("One output quaternion is produced per input quaternion")
}
