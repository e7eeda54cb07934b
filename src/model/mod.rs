/// Mod-related types.
pub mod mods;
