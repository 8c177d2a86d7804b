use enum_map::Enum;
use strum_macros::EnumIter;

/// Enum for pose parts, for chunking
#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug, Enum, EnumIter)]
pub enum PosePart {
    RootRotation,
    Body,
    Jaw,
    LeftEye,
    RightEye,
    LeftHand,
    RightHand,
}
impl PosePart {
    /// Parts that are never present in the motion clips and are always
    /// zero when posing the body model
    pub fn is_face(self) -> bool {
        matches!(self, Self::Jaw | Self::LeftEye | Self::RightEye)
    }
}
