use burn::backend::NdArray;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use mofea::mofea_core::{
    common::types::Gender,
    features::{
        assembler::{ExtractConfig, FeatureExtractor, FeatureVariant},
        contacts::TrailingFrame,
    },
    smpl_x::smpl_x_gpu::SmplXGPU,
    MofeaError,
};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum VariantArg {
    /// Keep the 6D rotations, 319 columns
    Rot6d,
    /// Decode the rotations to axis angles, 163 columns
    AxisAngle,
}
impl From<VariantArg> for FeatureVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Rot6d => FeatureVariant::Rot6d,
            VariantArg::AxisAngle => FeatureVariant::AxisAngle,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = "Turns a directory of .npy motion clips (root translation + 52 6D joint rotations) into per-frame features with foot contacts")]
struct Args {
    /// Directory with the .npy motion clips
    #[arg(short, long, default_value = "./motion")]
    input: PathBuf,
    /// Output directory. Defaults to ./motion_fea319 or ./motion_fea163 depending on the variant
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = VariantArg::AxisAngle)]
    variant: VariantArg,
    /// SMPL-X model as .npz
    #[arg(short, long, default_value = "./data/smplx/SMPLX_neutral_array_f32_slim.npz")]
    model: PathBuf,
    #[arg(long, default_value_t = Gender::Neutral)]
    gender: Gender,
    /// Frame rate of the clips, only reported
    #[arg(long, default_value_t = 30.0)]
    fps: f32,
    /// Label the last frame of every clip as not in contact
    #[arg(long)]
    no_trailing_contact: bool,
    /// Overridden by RUST_LOG
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<(), MofeaError> {
    let args = Args::parse();
    env_logger::Builder::new().filter_level(args.log_level).parse_default_env().init();

    let variant = FeatureVariant::from(args.variant);
    let config = ExtractConfig {
        variant,
        trailing_frame: if args.no_trailing_contact {
            TrailingFrame::NoContact
        } else {
            TrailingFrame::ZeroVelocity
        },
        fps: args.fps,
        ..Default::default()
    };
    let output = args.output.unwrap_or_else(|| variant.default_output_dir());

    let model = SmplXGPU::<NdArray>::new_from_npz(&args.model, args.gender, config.num_betas, config.num_expression_coeffs)?;
    let extractor = FeatureExtractor::new(Box::new(model), config);
    let written = extractor.process_dir(&args.input, &output)?;
    info!("Wrote {} feature files to {}", written.len(), output.display());
    Ok(())
}
