/// Beatmap related types.
pub mod beatmap;

/// Server-computed difficulty values.
pub mod difficulty;

/// Gamemode related types.
pub mod mode;

/// Single gamemods.
pub mod mods;

/// Conflict-aware collection of gamemods.
pub mod mod_set;

/// User profile related types.
pub mod user;
