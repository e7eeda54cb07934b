use std::fmt::{Display, Formatter, Result as FmtResult};

use rosu_mods::{GameModIntermode, GameModsIntermode, GameModsLegacy};

/// Mods of a simulated play.
///
/// The mods are only carried along for the scoring collaborator; the
/// simulation itself does not interact with them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameMods {
    inner: GameModsIntermode,
}

impl GameMods {
    /// No mods.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse mods from concatenated acronyms such as `"HDHR"`.
    ///
    /// Unknown acronyms are kept as-is.
    pub fn from_acronyms(acronyms: &str) -> Self {
        Self {
            inner: GameModsIntermode::from_acronyms(acronyms),
        }
    }

    /// Whether no mod is set.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Whether the given mod is set.
    pub fn contains(&self, gamemod: GameModIntermode) -> bool {
        self.inner.contains(gamemod)
    }
}

impl Display for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.inner, f)
    }
}

impl From<GameModsIntermode> for GameMods {
    fn from(inner: GameModsIntermode) -> Self {
        Self { inner }
    }
}

impl From<&GameModsIntermode> for GameMods {
    fn from(mods: &GameModsIntermode) -> Self {
        Self::from(mods.clone())
    }
}

impl From<GameModsLegacy> for GameMods {
    fn from(mods: GameModsLegacy) -> Self {
        Self {
            inner: GameModsIntermode::from(mods),
        }
    }
}

impl From<&str> for GameMods {
    fn from(acronyms: &str) -> Self {
        Self::from_acronyms(acronyms)
    }
}

/// Legacy bitflags as used by the osu!api v1.
///
/// See <https://github.com/ppy/osu-api/wiki#mods>
impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        Self::from(GameModsLegacy::from_bits(bits))
    }
}
