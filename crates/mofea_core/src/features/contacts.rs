use mofea_utils::array::gather_joints;
use ndarray as nd;
use ndarray::prelude::*;

/// Left ankle, right ankle, left foot, right foot
pub const FOOT_JOINT_IDX: [usize; 4] = [7, 8, 10, 11];
/// Per-frame displacement below which a foot is considered planted
pub const FOOT_CONTACT_THRESHOLD: f32 = 0.01;

/// The last frame has no successor to measure its velocity against. This
/// decides what its contact label is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingFrame {
    /// Velocity of the last frame is zero, so it is labeled as contact
    #[default]
    ZeroVelocity,
    /// Last frame is labeled as no contact
    NoContact,
}

/// Forward difference speed of every joint ``[nr_frames, nr_joints, 3]`` ->
/// ``[nr_frames, nr_joints]``. The last row is zero
pub fn foot_velocities(feet: &nd::Array3<f32>) -> nd::Array2<f32> {
    let (nr_frames, nr_joints, _) = feet.dim();
    let mut velocities = nd::Array2::<f32>::zeros((nr_frames, nr_joints));
    if nr_frames < 2 {
        return velocities;
    }
    let displacement = &feet.slice(s![1.., .., ..]) - &feet.slice(s![..-1, .., ..]);
    let speed = displacement.map_axis(Axis(2), |d| d.dot(&d).sqrt());
    velocities.slice_mut(s![..-1, ..]).assign(&speed);
    velocities
}

/// Binary contact labels ``[nr_frames, 4]`` for the foot joints of posed
/// SMPL-X joints ``[nr_frames, nr_joints, 3]``. 1.0 where the joint moves
/// strictly less than [`FOOT_CONTACT_THRESHOLD`] until the next frame
///
/// # Panics
/// Will panic if the positions do not contain the foot joints
pub fn foot_contacts(per_frame_joints: &nd::Array3<f32>, trailing: TrailingFrame) -> nd::Array2<f32> {
    assert!(
        per_frame_joints.dim().1 > FOOT_JOINT_IDX[3] && per_frame_joints.dim().2 == 3,
        "Joint positions of shape {:?} do not contain the foot joints",
        per_frame_joints.shape()
    );
    let feet = gather_joints(per_frame_joints, &FOOT_JOINT_IDX);
    let velocities = foot_velocities(&feet);
    let mut contacts = velocities.mapv(|v| if v < FOOT_CONTACT_THRESHOLD { 1.0 } else { 0.0 });
    if trailing == TrailingFrame::NoContact {
        if let Some(mut last) = contacts.axis_iter_mut(Axis(0)).last() {
            last.fill(0.0);
        }
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smpl_x::smpl_x::JOINT_NAMES;
    use pretty_assertions::assert_eq;

    /// 8 frames of 55 joints, static for frames [0, 5) then every joint moves
    /// 5cm along x per frame
    fn static_then_moving() -> nd::Array3<f32> {
        nd::Array3::from_shape_fn((8, 55, 3), |(t, j, c)| {
            let base = j as f32 * 0.1;
            if c == 0 && t >= 5 {
                base + 0.05 * (t - 4) as f32
            } else {
                base
            }
        })
    }

    #[test]
    fn foot_joints_are_ankles_and_feet() {
        let names: Vec<&str> = FOOT_JOINT_IDX.iter().map(|&j| JOINT_NAMES[j]).collect();
        assert_eq!(names, vec!["left_ankle", "right_ankle", "left_foot", "right_foot"]);
    }

    #[test]
    fn planted_then_moving() {
        let contacts = foot_contacts(&static_then_moving(), TrailingFrame::ZeroVelocity);
        assert_eq!(contacts.dim(), (8, 4));
        for t in 0..4 {
            assert!(contacts.row(t).iter().all(|&c| c == 1.0), "frame {t}");
        }
        //frame 4 moves to frame 5
        for t in 4..7 {
            assert!(contacts.row(t).iter().all(|&c| c == 0.0), "frame {t}");
        }
        assert!(contacts.row(7).iter().all(|&c| c == 1.0));
    }

    #[test]
    fn trailing_frame_without_contact() {
        let contacts = foot_contacts(&static_then_moving(), TrailingFrame::NoContact);
        assert!(contacts.row(7).iter().all(|&c| c == 0.0));
        assert!(contacts.row(0).iter().all(|&c| c == 1.0));
    }

    #[test]
    fn threshold_is_strict() {
        let mut joints = nd::Array3::<f32>::zeros((2, 12, 3));
        joints[(1, 7, 0)] = 0.011;
        joints[(1, 8, 0)] = 0.005;
        let contacts = foot_contacts(&joints, TrailingFrame::ZeroVelocity);
        assert_eq!(contacts.row(0).to_vec(), vec![0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn velocities_of_short_sequences() {
        assert_eq!(foot_velocities(&nd::Array3::zeros((0, 4, 3))).dim(), (0, 4));
        let single = foot_contacts(&nd::Array3::zeros((1, 55, 3)), TrailingFrame::ZeroVelocity);
        assert_eq!(single, array![[1.0_f32, 1.0, 1.0, 1.0]]);
        let vel = foot_velocities(&array![[[0.0_f32, 0.0, 0.0]], [[3.0, 4.0, 0.0]]]);
        assert_eq!(vel, array![[5.0_f32], [0.0]]);
    }
}
