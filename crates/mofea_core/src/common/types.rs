use strum_macros::{Display, EnumString};
/// Various ``SmplModel`` types. ``SmplH`` is the 52 joint layout the motion
/// clips are stored in, ``SmplX`` the 55 joint layout of the body model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum SmplType {
    SmplH,
    SmplX,
}
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    #[default]
    Neutral,
    Male,
    Female,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn gender_parses_case_insensitive() {
        assert_eq!(Gender::from_str("Neutral").unwrap(), Gender::Neutral);
        assert_eq!(Gender::from_str("female").unwrap(), Gender::Female);
        assert!(Gender::from_str("other").is_err());
        assert_eq!(Gender::Male.to_string(), "male");
    }
}
