use std::borrow::Cow;
use std::fmt::{self, Display};

/// Formats an `f32` the way MJCF attributes are written: shortest
/// round-trip digits, always with a decimal point or exponent (`1.0`, `0.25`,
/// `1e-8`).
#[derive(Debug, Clone, Copy)]
pub struct Float(pub f32);

impl Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the trailing `.0` that Display drops
        write!(f, "{:?}", self.0)
    }
}

/// Space separated list, e.g. `1.0 0.0 0.0 0.0`.
pub struct FloatList<'a>(pub &'a [f32]);

impl Display for FloatList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", Float(*value))?;
        }
        Ok(())
    }
}

/// Escapes a string for use inside a double-quoted attribute.
pub fn attr(value: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(value)
}
