use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// A single gameplay modifier.
///
/// [`GameMod::NoMod`] is not a real modifier; toggling it onto a
/// [`ModSet`](crate::model::mod_set::ModSet) clears the set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameMod {
    Hidden,
    HardRock,
    Easy,
    DoubleTime,
    Nightcore,
    HalfTime,
    Flashlight,
    NoFail,
    SpunOut,
    NoMod,
}

/// Mods that evict each other when toggled on.
///
/// Adding a new exclusive pair only requires a new entry here.
const CONFLICTS: &[(GameMod, &[GameMod])] = &[
    (GameMod::HardRock, &[GameMod::Easy]),
    (GameMod::Easy, &[GameMod::HardRock]),
    (GameMod::DoubleTime, &[GameMod::Nightcore, GameMod::HalfTime]),
    (GameMod::Nightcore, &[GameMod::DoubleTime, GameMod::HalfTime]),
    (GameMod::HalfTime, &[GameMod::DoubleTime, GameMod::Nightcore]),
];

impl GameMod {
    /// All mods in the order a mod picker would list them.
    pub const ALL: [Self; 10] = [
        Self::Hidden,
        Self::HardRock,
        Self::Easy,
        Self::DoubleTime,
        Self::Nightcore,
        Self::HalfTime,
        Self::Flashlight,
        Self::NoFail,
        Self::SpunOut,
        Self::NoMod,
    ];

    /// The two-letter acronym, e.g. `"HR"`.
    pub const fn acronym(self) -> &'static str {
        match self {
            Self::Hidden => "HD",
            Self::HardRock => "HR",
            Self::Easy => "EZ",
            Self::DoubleTime => "DT",
            Self::Nightcore => "NC",
            Self::HalfTime => "HT",
            Self::Flashlight => "FL",
            Self::NoFail => "NF",
            Self::SpunOut => "SO",
            Self::NoMod => "NM",
        }
    }

    /// Legacy bit value as used by osu!api v1 and score submissions.
    ///
    /// Nightcore carries the DoubleTime bit as well.
    pub const fn bits(self) -> u32 {
        match self {
            Self::NoFail => 1 << 0,
            Self::Easy => 1 << 1,
            Self::Hidden => 1 << 3,
            Self::HardRock => 1 << 4,
            Self::DoubleTime => 1 << 6,
            Self::HalfTime => 1 << 8,
            Self::Nightcore => (1 << 9) | (1 << 6),
            Self::Flashlight => 1 << 10,
            Self::SpunOut => 1 << 12,
            Self::NoMod => 0,
        }
    }

    /// Mods that cannot be active together with this one.
    ///
    /// Mods without an entry never evict anything.
    pub fn conflicts(self) -> &'static [GameMod] {
        for &(gamemod, conflicts) in CONFLICTS {
            if gamemod == self {
                return conflicts;
            }
        }

        &[]
    }

    /// Whether `self` and `other` are mutually exclusive.
    pub fn conflicts_with(self, other: Self) -> bool {
        self.conflicts().contains(&other)
    }
}

impl Display for GameMod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.acronym())
    }
}

/// Error when parsing a [`GameMod`] from an unknown acronym.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown mod acronym `{acronym}`")]
pub struct ParseModError {
    acronym: Box<str>,
}

impl ParseModError {
    /// The input that failed to parse.
    pub fn acronym(&self) -> &str {
        &self.acronym
    }
}

impl FromStr for GameMod {
    type Err = ParseModError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gamemod| gamemod.acronym().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseModError { acronym: s.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicts_are_symmetric() {
        for a in GameMod::ALL {
            for b in GameMod::ALL {
                assert_eq!(a.conflicts_with(b), b.conflicts_with(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn free_mods_have_no_conflicts() {
        for gamemod in [
            GameMod::Hidden,
            GameMod::Flashlight,
            GameMod::NoFail,
            GameMod::SpunOut,
            GameMod::NoMod,
        ] {
            assert!(gamemod.conflicts().is_empty(), "{gamemod}");
        }
    }

    #[test]
    fn parse_acronyms() {
        assert_eq!("hr".parse(), Ok(GameMod::HardRock));
        assert_eq!("NC".parse(), Ok(GameMod::Nightcore));
        assert_eq!("nM".parse(), Ok(GameMod::NoMod));

        let err = "XX".parse::<GameMod>().unwrap_err();
        assert_eq!(err.acronym(), "XX");
        assert_eq!(err.to_string(), "unknown mod acronym `XX`");
    }

    #[test]
    fn nightcore_implies_double_time_bit() {
        let dt = GameMod::DoubleTime.bits();
        assert_eq!(GameMod::Nightcore.bits() & dt, dt);
    }
}
