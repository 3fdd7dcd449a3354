use std::fmt::{Display, Formatter, Result as FmtResult};

use super::mods::GameMod;

/// The currently selected mods in click order.
///
/// No two conflicting mods (see [`GameMod::conflicts`]) are ever contained
/// at the same time and [`GameMod::NoMod`] is never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModSet {
    inner: Vec<GameMod>,
}

impl ModSet {
    /// An empty set, i.e. nomod.
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Toggle a mod on or off.
    ///
    /// - [`GameMod::NoMod`] clears the set.
    /// - A mod that is already active is removed.
    /// - Otherwise all mods that conflict with `gamemod` are evicted before
    ///   it's appended.
    pub fn toggle(&mut self, gamemod: GameMod) {
        if gamemod == GameMod::NoMod {
            self.inner.clear();
        } else if let Some(idx) = self.position(gamemod) {
            self.inner.remove(idx);
        } else {
            self.inner.retain(|active| !gamemod.conflicts_with(*active));
            self.inner.push(gamemod);
        }
    }

    /// Whether the mod is active.
    ///
    /// [`GameMod::NoMod`] counts as active for the empty set.
    pub fn contains(&self, gamemod: GameMod) -> bool {
        if gamemod == GameMod::NoMod {
            self.is_empty()
        } else {
            self.position(gamemod).is_some()
        }
    }

    /// Whether any of the given mods is active.
    pub fn contains_any(&self, mods: &[GameMod]) -> bool {
        mods.iter().any(|gamemod| self.contains(*gamemod))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterate over the active mods in the order they were toggled on.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = GameMod> + '_ {
        self.inner.iter().copied()
    }

    /// The acronyms of all active mods in click order.
    pub fn acronyms(&self) -> Vec<&'static str> {
        self.iter().map(GameMod::acronym).collect()
    }

    /// The legacy bit representation.
    pub fn bits(&self) -> u32 {
        self.iter().fold(0, |bits, gamemod| bits | gamemod.bits())
    }

    fn position(&self, gamemod: GameMod) -> Option<usize> {
        self.inner.iter().position(|active| *active == gamemod)
    }
}

impl Display for ModSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_empty() {
            return f.write_str(GameMod::NoMod.acronym());
        }

        for gamemod in self.iter() {
            f.write_str(gamemod.acronym())?;
        }

        Ok(())
    }
}

/// Collecting goes through [`ModSet::toggle`] so the result never contains
/// conflicting mods; later mods win.
impl FromIterator<GameMod> for ModSet {
    fn from_iter<I: IntoIterator<Item = GameMod>>(iter: I) -> Self {
        let mut mods = Self::new();
        mods.extend(iter);

        mods
    }
}

impl Extend<GameMod> for ModSet {
    fn extend<I: IntoIterator<Item = GameMod>>(&mut self, iter: I) {
        for gamemod in iter {
            if gamemod == GameMod::NoMod || !self.contains(gamemod) {
                self.toggle(gamemod);
            }
        }
    }
}

impl From<GameMod> for ModSet {
    fn from(gamemod: GameMod) -> Self {
        Self::from_iter([gamemod])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::mods::GameMod::{
        DoubleTime, Easy, HalfTime, HardRock, Hidden, Nightcore, NoMod,
    };

    #[test]
    fn toggle_appends_in_click_order() {
        let mut mods = ModSet::new();
        mods.toggle(HardRock);
        mods.toggle(Hidden);
        mods.toggle(DoubleTime);

        assert_eq!(mods.to_string(), "HRHDDT");
        assert_eq!(mods.acronyms(), ["HR", "HD", "DT"]);
    }

    #[test]
    fn toggle_evicts_conflicts() {
        let mut mods = ModSet::from_iter([Hidden, DoubleTime, HardRock]);
        mods.toggle(HalfTime);
        mods.toggle(Easy);

        assert_eq!(mods.iter().collect::<Vec<_>>(), [Hidden, HalfTime, Easy]);
    }

    #[test]
    fn nightcore_replaces_double_time() {
        let mut mods = ModSet::from(DoubleTime);
        mods.toggle(Nightcore);

        assert!(!mods.contains(DoubleTime));
        assert!(mods.contains(Nightcore));
        assert_eq!(mods.bits(), 512 + 64);
    }

    #[test]
    fn nomod_clears() {
        let mut mods = ModSet::from_iter([Hidden, HardRock]);
        mods.toggle(NoMod);

        assert!(mods.is_empty());
        assert!(mods.contains(NoMod));
        assert_eq!(mods.to_string(), "NM");
    }

    #[test]
    fn collect_keeps_duplicates_out() {
        let mods = ModSet::from_iter([Hidden, Hidden, DoubleTime]);

        assert_eq!(mods.len(), 2);
        assert_eq!(mods.bits(), 8 + 64);
    }
}
