//! Column type tags and borrowed scalar values.

use std::fmt;

/// Declared scalar type of a column.
///
/// A simple, C-like tag: it selects the typed vector backing a column and the
/// cast applied to text fields during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnType {
    /// Text, stored as-is.
    #[default]
    Utf8,
    /// Signed 64-bit integer.
    Int64,
    /// 64-bit floating point.
    Float64,
}

impl ColumnType {
    /// Resolve a type identifier as written in a manifest.
    ///
    /// `"INTEGER"` and `"FLOAT"` select the numeric types. Every other
    /// identifier (`"STRING"`, `"CHAR"`, `"DATE"`, ...) leaves the column as
    /// text, so no cast is applied. Matching is case-sensitive.
    pub fn from_identifier(ident: &str) -> Self {
        match ident {
            "INTEGER" => ColumnType::Int64,
            "FLOAT" => ColumnType::Float64,
            _ => ColumnType::Utf8,
        }
    }

    /// Canonical identifier, the inverse of [`ColumnType::from_identifier`].
    pub fn identifier(&self) -> &'static str {
        match self {
            ColumnType::Utf8 => "STRING",
            ColumnType::Int64 => "INTEGER",
            ColumnType::Float64 => "FLOAT",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// A single value borrowed from a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Utf8(&'a str),
    Int64(i64),
    Float64(f64),
}

impl ValueRef<'_> {
    pub fn column_type(&self) -> ColumnType {
        match self {
            ValueRef::Utf8(_) => ColumnType::Utf8,
            ValueRef::Int64(_) => ColumnType::Int64,
            ValueRef::Float64(_) => ColumnType::Float64,
        }
    }
}

impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRef::Utf8(s) => f.write_str(s),
            ValueRef::Int64(v) => write!(f, "{v}"),
            ValueRef::Float64(v) => f.write_str(&format_float(*v)),
        }
    }
}

/// Render a float in its shortest round-trip form.
///
/// Integral values keep a trailing `.0`; magnitudes below `1e-4` or at least
/// `1e16` switch to exponent notation with a signed, two-digit exponent
/// (`1e+16`, `1.5e-05`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "-1.25e-3".
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exponent) {
        if exponent < 0 {
            let zeros = "0".repeat((-exponent - 1) as usize);
            format!("{sign}0.{zeros}{digits}")
        } else {
            let point = exponent as usize + 1;
            if digits.len() <= point {
                let zeros = "0".repeat(point - digits.len());
                format!("{sign}{digits}{zeros}.0")
            } else {
                format!("{sign}{}.{}", &digits[..point], &digits[point..])
            }
        }
    } else {
        let mantissa = if digits.len() == 1 {
            digits
        } else {
            format!("{}.{}", &digits[..1], &digits[1..])
        };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exp_sign}{:02}", exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_resolve_with_text_fallback() {
        assert_eq!(ColumnType::from_identifier("INTEGER"), ColumnType::Int64);
        assert_eq!(ColumnType::from_identifier("FLOAT"), ColumnType::Float64);
        assert_eq!(ColumnType::from_identifier("STRING"), ColumnType::Utf8);
        assert_eq!(ColumnType::from_identifier("CHAR"), ColumnType::Utf8);
        assert_eq!(ColumnType::from_identifier("DATE"), ColumnType::Utf8);
        assert_eq!(ColumnType::from_identifier("integer"), ColumnType::Utf8);
    }

    #[test]
    fn floats_render_like_shortest_repr() {
        assert_eq!(format_float(2.75), "2.75");
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(100.0), "100.0");
        assert_eq!(format_float(-2.5), "-2.5");
        assert_eq!(format_float(0.001), "0.001");
        assert_eq!(format_float(12345.678), "12345.678");
        assert_eq!(format_float(1.5e-5), "1.5e-05");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(-2.5e20), "-2.5e+20");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn formatted_floats_parse_back() {
        for v in [2.75, 0.1 + 0.2, 1e-7, 123456789.125, 9.999e15, 6.02e23] {
            let text = format_float(v);
            assert_eq!(text.parse::<f64>().unwrap(), v, "{text}");
        }
    }
}
