//! Linear range mapping between numeric domains
//!
//! One interpolation routine shared by attribute transformers that map an
//! event field from one range onto another, e.g. a controller value onto a
//! parameter range or a note number onto a velocity gradient.

/// Numeric type usable as the argument or output domain of [`map_range`].
///
/// Interpolation is computed in `f64`; `from_f64` converts back with the
/// target type's cast semantics, which for integer types truncates toward
/// zero.
pub trait Numeric: Copy + PartialOrd {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(impl Numeric for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(value: f64) -> Self {
                value as $t
            }
        })*
    };
}

impl_numeric!(u8, u16, u32, i8, i16, i32, i64, f32, f64);

/// Map `arg` from the range `[arg_lower, arg_upper]` onto the range
/// `[val_lower, val_upper]`.
///
/// Arguments at or beyond the bounds clamp to the corresponding output
/// bound, so for an ascending output range the result always lies within
/// `[val_lower, val_upper]` and is monotonic in `arg`. Interior values
/// interpolate linearly; integer output types truncate toward zero.
///
/// The argument range must not be degenerate: `arg_lower == arg_upper`
/// divides by zero. Callers validate that when the ranges are configured.
pub fn map_range<A: Numeric, V: Numeric>(
    arg: A,
    arg_lower: A,
    arg_upper: A,
    val_lower: V,
    val_upper: V,
) -> V {
    if arg <= arg_lower {
        val_lower
    } else if arg >= arg_upper {
        val_upper
    } else {
        let dx = arg_upper.to_f64() - arg_lower.to_f64();
        let dy = val_upper.to_f64() - val_lower.to_f64();
        V::from_f64(dy / dx * (arg.to_f64() - arg_lower.to_f64()) + val_lower.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_endpoints_clamp() {
        assert_approx_eq!(map_range::<_, f64>(0, 0, 10, 0.0, 1.0), 0.0);
        assert_approx_eq!(map_range::<_, f64>(-5, 0, 10, 0.0, 1.0), 0.0);
        assert_approx_eq!(map_range::<_, f64>(10, 0, 10, 0.0, 1.0), 1.0);
        assert_approx_eq!(map_range::<_, f64>(15, 0, 10, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_midpoint() {
        assert_approx_eq!(map_range::<_, f64>(5, 0, 10, 0.0, 1.0), 0.5);
    }

    #[test]
    fn test_monotonic_ascending() {
        let mut prev = f64::NEG_INFINITY;
        for arg in -10..=20 {
            let value: f64 = map_range(arg, 0, 10, 0.0, 1.0);
            assert!(value >= prev, "not monotonic at arg {}", arg);
            prev = value;
        }
    }

    #[test]
    fn test_output_within_range() {
        for arg in [-1000, -1, 0, 3, 7, 10, 11, 1000] {
            let value: f64 = map_range(arg, 0, 10, 2.0, 8.0);
            assert!((2.0..=8.0).contains(&value), "out of range at arg {}", arg);
        }
    }

    #[test]
    fn test_descending_output_range() {
        assert_approx_eq!(map_range::<_, f64>(0, 0, 10, 1.0, 0.0), 1.0);
        assert_approx_eq!(map_range::<_, f64>(10, 0, 10, 1.0, 0.0), 0.0);
        assert_approx_eq!(map_range::<_, f64>(5, 0, 10, 1.0, 0.0), 0.5);
    }

    #[test]
    fn test_float_argument_domain() {
        assert_approx_eq!(map_range(0.25, 0.0, 1.0, 0, 100).to_f64(), 25.0);
        assert_eq!(map_range(0.5f32, 0.0, 1.0, 0, 127), 63);
    }

    #[test]
    fn test_integer_output_truncates() {
        // 127 * 1/3 = 42.33 truncates to 42
        assert_eq!(map_range(1, 0, 3, 0, 127), 42);
        // 127 * 2/3 = 84.67 truncates to 84
        assert_eq!(map_range(2, 0, 3, 0, 127), 84);
    }

    #[test]
    fn test_controller_to_velocity() {
        // a typical CC-to-velocity mapping
        assert_eq!(map_range(64, 0, 127, 20, 100), 60);
        assert_eq!(map_range(0, 0, 127, 20, 100), 20);
        assert_eq!(map_range(127, 0, 127, 20, 100), 100);
    }
}
