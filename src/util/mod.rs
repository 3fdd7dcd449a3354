pub mod float_ext;
pub mod mods;
