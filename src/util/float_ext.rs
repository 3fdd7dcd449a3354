pub trait FloatExt: Sized {
    /// Round half away from zero to the given amount of decimals.
    fn round_to(self, decimals: i32) -> Self;
}

macro_rules! impl_float_ext {
    ( $ty:ty ) => {
        impl FloatExt for $ty {
            fn round_to(self, decimals: i32) -> Self {
                let factor = <$ty>::powi(10.0, decimals);

                (self * factor).round() / factor
            }
        }
    };
}

impl_float_ext!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to() {
        assert!((5.678_f64.round_to(2) - 5.68).abs() < f64::EPSILON);
        assert!((5.2_f64.round_to(2) - 5.2).abs() < f64::EPSILON);
        assert!(((4.0_f64 * 1.3).round_to(2) - 5.2).abs() < f64::EPSILON);
        assert!((2.004_f64.round_to(2) - 2.0).abs() < f64::EPSILON);
    }
}
