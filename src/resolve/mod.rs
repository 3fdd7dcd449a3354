use crate::{
    model::{beatmap::BeatmapAttributes, difficulty::DifficultyAttributes, mod_set::ModSet},
    util::{float_ext::FloatExt, mods::Mods},
};

pub use self::color::{AttrColor, ColorRule, Field, COLOR_RULES};

mod color;

/// Shown in place of a value the server did not provide.
pub const PLACEHOLDER: &str = "?";

/// A single displayed attribute.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AttributeValue {
    /// Full precision value; `None` if unknown.
    pub value: Option<f64>,
    pub color: AttrColor,
}

impl AttributeValue {
    /// A value with neutral color.
    pub const fn new(value: Option<f64>) -> Self {
        Self {
            value,
            color: AttrColor::Neutral,
        }
    }

    /// The value rounded to two decimals.
    pub fn rounded(&self) -> Option<f64> {
        self.value.map(|value| value.round_to(2))
    }

    /// Text for the attribute card, e.g. `"5.2"` or `"?"`.
    pub fn display(&self) -> String {
        self.rounded()
            .map_or_else(|| PLACEHOLDER.to_owned(), |value| value.to_string())
    }

    /// Unrounded text, e.g. for a tooltip.
    pub fn exact(&self) -> String {
        self.value
            .map_or_else(|| PLACEHOLDER.to_owned(), |value| value.to_string())
    }
}

/// Beatmap attributes after applying mods, ready to be rendered.
///
/// Created fresh by [`resolve`] on every mod change.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveAttributes {
    pub stars: AttributeValue,
    /// Length in seconds.
    pub length: AttributeValue,
    pub bpm: AttributeValue,
    pub cs: AttributeValue,
    pub ar: AttributeValue,
    pub od: AttributeValue,
    pub hp: AttributeValue,
}

impl EffectiveAttributes {
    pub const fn get(&self, field: Field) -> &AttributeValue {
        match field {
            Field::Stars => &self.stars,
            Field::Length => &self.length,
            Field::Bpm => &self.bpm,
            Field::Cs => &self.cs,
            Field::Ar => &self.ar,
            Field::Od => &self.od,
            Field::Hp => &self.hp,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut AttributeValue {
        match field {
            Field::Stars => &mut self.stars,
            Field::Length => &mut self.length,
            Field::Bpm => &mut self.bpm,
            Field::Cs => &mut self.cs,
            Field::Ar => &mut self.ar,
            Field::Od => &mut self.od,
            Field::Hp => &mut self.hp,
        }
    }

    /// Iterate over all fields with their values in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &AttributeValue)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// The length formatted as `m:ss`.
    pub fn length_display(&self) -> String {
        match self.length.value {
            Some(secs) => {
                let secs = secs as u32;

                format!("{}:{:02}", secs / 60, secs % 60)
            }
            None => PLACEHOLDER.to_owned(),
        }
    }
}

/// Derive the displayed attributes of a beatmap for the given mods.
///
/// CS, HP, length, and BPM are adjusted locally. Stars, AR, and OD always
/// come from `server`, which must have been computed for exactly `mods`.
pub fn resolve(
    base: &BeatmapAttributes,
    mods: &ModSet,
    server: &DifficultyAttributes,
) -> EffectiveAttributes {
    let clock_rate = mods.clock_rate();

    let mut attrs = EffectiveAttributes {
        stars: AttributeValue::new(Some(server.stars)),
        length: AttributeValue::new(Some(length(base.total_length, clock_rate))),
        bpm: AttributeValue::new(base.bpm.map(|bpm| bpm * clock_rate)),
        cs: AttributeValue::new(Some(cs(base.cs, mods))),
        ar: AttributeValue::new(server.ar),
        od: AttributeValue::new(server.od),
        hp: AttributeValue::new(Some(hp(base.hp, mods))),
    };

    color::apply_rules(COLOR_RULES, mods, &mut attrs);

    attrs
}

impl BeatmapAttributes {
    /// Shorthand for [`resolve`].
    pub fn effective(&self, mods: &ModSet, server: &DifficultyAttributes) -> EffectiveAttributes {
        resolve(self, mods, server)
    }
}

// EZ takes precedence over HR should both ever be present.
fn cs(cs: f64, mods: &ModSet) -> f64 {
    if mods.ez() {
        cs * 0.5
    } else if mods.hr() {
        (cs * 1.3).min(10.0)
    } else {
        cs
    }
}

fn hp(hp: f64, mods: &ModSet) -> f64 {
    if mods.ez() {
        hp * 0.5
    } else if mods.hr() {
        (hp * 1.4).min(10.0)
    } else {
        hp
    }
}

fn length(total_length: u32, clock_rate: f64) -> f64 {
    (f64::from(total_length) / clock_rate).floor()
}
