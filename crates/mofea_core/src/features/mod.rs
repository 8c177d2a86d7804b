pub mod assembler;
pub mod clip;
pub mod contacts;
