//! Integration tests for the feature extraction pipeline
//!
//! Clips go through the whole chain: 6D decoding -> SMPL-H to SMPL-X pose
//! remapping -> forward kinematics -> foot contacts -> feature rows on disk

mod common;

use approx::assert_abs_diff_eq;
use common::{motion_with_trans, synthetic_smplx, write_motion};
use mofea_core::{
    features::{
        assembler::{ExtractConfig, FeatureExtractor, FeatureVariant},
        clip::MotionClip,
        contacts::TrailingFrame,
    },
    MofeaError,
};
use ndarray as nd;
use ndarray::s;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn extractor(variant: FeatureVariant) -> FeatureExtractor<burn::backend::NdArray> {
    let config = ExtractConfig {
        variant,
        ..Default::default()
    };
    FeatureExtractor::new(Box::new(synthetic_smplx()), config)
}

#[test]
fn identity_clip_end_to_end() {
    let motion = motion_with_trans(|_| [0.0; 3], 10);
    let clip = MotionClip::from_array(&motion);
    let features = extractor(FeatureVariant::Rot6d).extract(&clip);

    assert_eq!(features.dim(), (10, 319));
    assert!(features.slice(s![.., 0..4]).iter().all(|&c| c == 1.0));
    assert!(features.slice(s![.., 4..7]).iter().all(|&x| x == 0.0));
    assert_eq!(features.slice(s![.., 7..]), motion.slice(s![.., 3..]));
}

#[test]
fn axis_angle_variant_decodes_rotations() {
    let motion = motion_with_trans(|t| [0.0, 0.0, t as f32 * 0.001], 6);
    let features = extractor(FeatureVariant::AxisAngle).extract(&MotionClip::from_array(&motion));
    assert_eq!(features.dim(), (6, 163));
    assert_abs_diff_eq!(features.slice(s![.., 7..]), nd::Array2::<f32>::zeros((6, 156)), epsilon = 1e-6);
    assert_abs_diff_eq!(features[(5, 6)], 0.005, epsilon = 1e-7);
}

#[test]
fn widths_hold_for_any_length() {
    for nr_frames in [1, 2, 17] {
        let clip = MotionClip::from_array(&motion_with_trans(|t| [t as f32, 0.0, 0.0], nr_frames));
        for variant in [FeatureVariant::Rot6d, FeatureVariant::AxisAngle] {
            let features = extractor(variant).extract(&clip);
            assert_eq!(features.dim(), (nr_frames, variant.width()));
        }
    }
}

#[test]
fn moving_root_breaks_contact() {
    //walking 5cm per frame for the first 4 frames, standing afterwards
    let motion = motion_with_trans(|t| [0.05 * t.min(4) as f32, 0.0, 0.0], 8);
    let clip = MotionClip::from_array(&motion);
    let features = extractor(FeatureVariant::AxisAngle).extract(&clip);
    let contacts = features.slice(s![.., 0..4]);
    for t in 0..4 {
        assert!(contacts.row(t).iter().all(|&c| c == 0.0), "frame {t}");
    }
    for t in 4..8 {
        assert!(contacts.row(t).iter().all(|&c| c == 1.0), "frame {t}");
    }

    let config = ExtractConfig {
        trailing_frame: TrailingFrame::NoContact,
        ..Default::default()
    };
    let strict = FeatureExtractor::new(Box::new(synthetic_smplx()), config).extract(&clip);
    assert!(strict.slice(s![7, 0..4]).iter().all(|&c| c == 0.0));
}

#[test]
fn rotating_the_root_moves_the_feet() {
    //root spins a quarter turn about z between frame 0 and 1
    let mut motion = motion_with_trans(|_| [0.0; 3], 3);
    motion.slice_mut(s![1.., 3..9]).assign(&nd::array![0.0_f32, -1.0, 0.0, 1.0, 0.0, 0.0]);
    let clip = MotionClip::from_array(&motion);
    let extractor = extractor(FeatureVariant::AxisAngle);
    let joints = extractor.joint_positions(&clip, &clip.decode_axis_angle());
    assert_eq!(joints.dim(), (3, 55, 3));
    //rows of the rotation are [0,-1,0],[1,0,0], so -y maps to +x
    assert_abs_diff_eq!(joints[(1, 7, 0)], -joints[(0, 7, 1)], epsilon = 1e-4);
    let features = extractor.extract(&clip);
    assert!(features.slice(s![0, 0..4]).iter().all(|&c| c == 0.0));
    assert!(features.slice(s![1, 0..4]).iter().all(|&c| c == 1.0));
}

#[test]
fn directory_is_processed_in_order() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("motion_fea163");
    write_motion(input.path(), "b_clip.npy", &motion_with_trans(|_| [0.0; 3], 3));
    write_motion(input.path(), "a_clip.smplx.npy", &motion_with_trans(|_| [0.0; 3], 5));
    std::fs::write(input.path().join("notes.txt"), "not a clip").unwrap();

    let written = extractor(FeatureVariant::AxisAngle).process_dir(input.path(), &out_dir).unwrap();
    assert_eq!(written, vec![out_dir.join("a_clip.npy"), out_dir.join("b_clip.npy")]);

    let features: nd::Array2<f32> = ndarray_npy::read_npy(out_dir.join("a_clip.npy")).unwrap();
    assert_eq!(features.dim(), (5, 163));
}

#[test]
fn f64_clips_are_cast() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let motion = motion_with_trans(|t| [t as f32, 0.0, 0.0], 4);
    ndarray_npy::write_npy(input.path().join("double.npy"), &motion.mapv(f64::from)).unwrap();
    let written = extractor(FeatureVariant::Rot6d).process_file(&input.path().join("double.npy"), output.path()).unwrap();
    assert_eq!(written, output.path().join("double.npy"));
    let features: nd::Array2<f32> = ndarray_npy::read_npy(&written).unwrap();
    assert_eq!(features.slice(s![.., 4..7]), motion.slice(s![.., 0..3]));
}

#[test]
fn missing_input_dir_is_an_error() {
    let output = tempfile::tempdir().unwrap();
    let res = extractor(FeatureVariant::Rot6d).process_dir(&PathBuf::from("./no/such/dir"), output.path());
    assert!(matches!(res, Err(MofeaError::InvalidInputDir(_))));
}

#[test]
fn failing_clip_aborts_the_batch() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    std::fs::write(input.path().join("a_broken.npy"), b"garbage").unwrap();
    write_motion(input.path(), "b_fine.npy", &motion_with_trans(|_| [0.0; 3], 2));
    let res = extractor(FeatureVariant::Rot6d).process_dir(input.path(), output.path());
    assert!(matches!(res, Err(MofeaError::NpyRead { .. })));
    assert!(!output.path().join("b_fine.npy").exists());
}

#[test]
fn hidden_clips_are_skipped_and_nameless_clips_rejected() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    for name in [".a.npy", ".b.npy", "c.NPY", "d.npy"] {
        write_motion(input.path(), name, &motion_with_trans(|_| [0.0; 3], 2));
    }
    let extractor = extractor(FeatureVariant::Rot6d);
    let written = extractor.process_dir(input.path(), output.path()).unwrap();
    assert_eq!(written, vec![output.path().join("d.npy")]);
    assert!(!output.path().join(".npy").exists());

    let res = extractor.process_file(&input.path().join(".a.npy"), output.path());
    assert!(matches!(res, Err(MofeaError::InvalidClipName(_))));
    assert!(!output.path().join(".npy").exists());
}
