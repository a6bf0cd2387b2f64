//! Hashable key values for membership tests.

use csvframe_column_map::ValueRef;

/// A single key column value, normalised so that equal values hash equally.
///
/// Integers and floats share one numeric domain: a float with no fractional
/// part inside the `i64` range is stored as [`KeyValue::Int`], so `2` and
/// `2.0` compare equal. Other floats are kept by bit pattern. Text never
/// equals a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum KeyValue<'a> {
    Utf8(&'a str),
    Int(i64),
    Float(u64), // Store as bits for hashing
}

impl<'a> KeyValue<'a> {
    /// `None` for NaN, which never equals anything.
    pub(crate) fn from_value(value: ValueRef<'a>) -> Option<Self> {
        match value {
            ValueRef::Utf8(s) => Some(KeyValue::Utf8(s)),
            ValueRef::Int64(v) => Some(KeyValue::Int(v)),
            ValueRef::Float64(v) => Self::from_float(v),
        }
    }

    fn from_float(v: f64) -> Option<Self> {
        const I64_BOUND: f64 = 9_223_372_036_854_775_808.0; // 2^63

        if v.is_nan() {
            return None;
        }
        if v.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&v) {
            // Also folds -0.0 into 0.
            return Some(KeyValue::Int(v as i64));
        }
        Some(KeyValue::Float(v.to_bits()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_floats_match_integers() {
        assert_eq!(
            KeyValue::from_value(ValueRef::Float64(2.0)),
            KeyValue::from_value(ValueRef::Int64(2))
        );
        assert_eq!(
            KeyValue::from_value(ValueRef::Float64(-0.0)),
            Some(KeyValue::Int(0))
        );
    }

    #[test]
    fn fractional_floats_and_text_stay_distinct() {
        assert_ne!(
            KeyValue::from_value(ValueRef::Float64(2.5)),
            KeyValue::from_value(ValueRef::Int64(2))
        );
        assert_ne!(
            KeyValue::from_value(ValueRef::Utf8("2")),
            KeyValue::from_value(ValueRef::Int64(2))
        );
    }

    #[test]
    fn nan_has_no_key() {
        assert_eq!(KeyValue::from_value(ValueRef::Float64(f64::NAN)), None);
    }

    #[test]
    fn large_integers_compare_exactly() {
        let float = KeyValue::from_value(ValueRef::Float64(9_007_199_254_740_992.0));
        assert_eq!(float, Some(KeyValue::Int(9_007_199_254_740_992)));
        assert_ne!(float, KeyValue::from_value(ValueRef::Int64(9_007_199_254_740_993)));
    }
}
