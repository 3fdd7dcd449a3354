use crate::model::{mod_set::ModSet, mods::GameMod};

/// Predicates over a mod combination.
pub trait Mods: Copy {
    fn ez(self) -> bool;
    fn hr(self) -> bool;
    fn dt(self) -> bool;
    fn nc(self) -> bool;
    fn ht(self) -> bool;

    /// DoubleTime or Nightcore.
    fn speed_up(self) -> bool {
        self.dt() || self.nc()
    }

    fn clock_rate(self) -> f64 {
        if self.speed_up() {
            1.5
        } else if self.ht() {
            0.75
        } else {
            1.0
        }
    }
}

macro_rules! impl_mods_fn {
    ( $fn_name:ident, $gamemod:ident ) => {
        fn $fn_name(self) -> bool {
            self.contains(GameMod::$gamemod)
        }
    };
}

impl Mods for &ModSet {
    impl_mods_fn!(ez, Easy);
    impl_mods_fn!(hr, HardRock);
    impl_mods_fn!(dt, DoubleTime);
    impl_mods_fn!(nc, Nightcore);
    impl_mods_fn!(ht, HalfTime);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        let mods = ModSet::from_iter([GameMod::Hidden, GameMod::Nightcore, GameMod::Easy]);

        assert!((&mods).nc());
        assert!((&mods).ez());
        assert!((&mods).speed_up());
        assert!(!(&mods).hr());
        assert!(!(&mods).dt());
    }

    #[test]
    fn clock_rate() {
        let rate = |mods: &[GameMod]| ModSet::from_iter(mods.iter().copied()).clock_rate();

        assert!((rate(&[]) - 1.0).abs() < f64::EPSILON);
        assert!((rate(&[GameMod::DoubleTime]) - 1.5).abs() < f64::EPSILON);
        assert!((rate(&[GameMod::Nightcore]) - 1.5).abs() < f64::EPSILON);
        assert!((rate(&[GameMod::HalfTime]) - 0.75).abs() < f64::EPSILON);
        assert!((rate(&[GameMod::Hidden, GameMod::Flashlight]) - 1.0).abs() < f64::EPSILON);
    }
}
