use crate::model::{mod_set::ModSet, mods::GameMod};

use super::EffectiveAttributes;

/// Display color tag of a single attribute.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttrColor {
    /// Unaffected by mods.
    #[default]
    Neutral,
    Flashlight,
    HardRock,
    Easy,
    DoubleTime,
    HalfTime,
}

impl AttrColor {
    /// Hex color code for the host's theme.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Neutral => "#000000",
            Self::Flashlight => "#4A4A4A",
            Self::HardRock => "#E53935",
            Self::Easy => "#43A047",
            Self::DoubleTime => "#8E24AA",
            Self::HalfTime => "#757575",
        }
    }
}

/// An attribute of [`EffectiveAttributes`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Stars,
    Length,
    Bpm,
    Cs,
    Ar,
    Od,
    Hp,
}

impl Field {
    pub const ALL: [Self; 7] = [
        Self::Stars,
        Self::Length,
        Self::Bpm,
        Self::Cs,
        Self::Ar,
        Self::Od,
        Self::Hp,
    ];

    /// Short label as shown next to the value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stars => "Stars",
            Self::Length => "Length",
            Self::Bpm => "BPM",
            Self::Cs => "CS",
            Self::Ar => "AR",
            Self::Od => "OD",
            Self::Hp => "HP",
        }
    }
}

/// A color override.
///
/// The first alternative whose mods intersect the active mods recolors all
/// of [`fields`](ColorRule::fields); later alternatives are skipped.
#[derive(Copy, Clone, Debug)]
pub struct ColorRule {
    pub alternatives: &'static [(&'static [GameMod], AttrColor)],
    pub fields: &'static [Field],
}

impl ColorRule {
    /// The color this rule assigns for the given mods, if any.
    pub fn color_for(&self, mods: &ModSet) -> Option<AttrColor> {
        self.alternatives
            .iter()
            .find(|(triggers, _)| mods.contains_any(triggers))
            .map(|(_, color)| *color)
    }
}

/// All color overrides in application order.
///
/// Later rules overwrite earlier ones on shared fields so the precedence is
/// neutral < FL < HR/EZ < DT/NC/HT.
pub const COLOR_RULES: &[ColorRule] = &[
    ColorRule {
        alternatives: &[(&[GameMod::Flashlight], AttrColor::Flashlight)],
        fields: &[Field::Stars],
    },
    ColorRule {
        alternatives: &[
            (&[GameMod::HardRock], AttrColor::HardRock),
            (&[GameMod::Easy], AttrColor::Easy),
        ],
        fields: &[Field::Stars, Field::Cs, Field::Ar, Field::Od, Field::Hp],
    },
    ColorRule {
        alternatives: &[
            (
                &[GameMod::DoubleTime, GameMod::Nightcore],
                AttrColor::DoubleTime,
            ),
            (&[GameMod::HalfTime], AttrColor::HalfTime),
        ],
        fields: &[Field::Stars, Field::Length, Field::Bpm, Field::Ar, Field::Od],
    },
];

/// Apply the rules in order, each overwriting the colors of its fields.
pub(super) fn apply_rules(rules: &[ColorRule], mods: &ModSet, attrs: &mut EffectiveAttributes) {
    for rule in rules {
        let Some(color) = rule.color_for(mods) else {
            continue;
        };

        for field in rule.fields {
            attrs.get_mut(*field).color = color;
        }
    }
}
