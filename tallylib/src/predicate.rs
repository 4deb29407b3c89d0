//! Predicate expressions parsed from text.
//!
//! Closures cover predicates written in Rust; data-driven callers (the
//! `tally` CLI, config files) need predicates described as strings. A
//! [`ValueTest`] applies to a single numeric value, a [`ComplexTest`]
//! combines optional per-part tests on a complex value into a conjunction.

use std::str::FromStr;

use num_complex::Complex64;

use crate::error::TallyError;

/// A test applied to a single numeric value.
///
/// Parsed from an operator followed by a threshold (`>0`, `<= 1.5`, `!=0`)
/// or a named class (`positive`, `nonzero`, `finite`, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueTest {
    /// Strictly greater than the threshold
    Gt(f64),
    /// Greater than or equal to the threshold
    Ge(f64),
    /// Strictly less than the threshold
    Lt(f64),
    /// Less than or equal to the threshold
    Le(f64),
    /// Equal to the threshold
    Eq(f64),
    /// Not equal to the threshold
    Ne(f64),
    /// Strictly greater than zero
    Positive,
    /// Strictly less than zero
    Negative,
    /// Equal to zero
    Zero,
    /// Different from zero
    Nonzero,
    /// Neither infinite nor NaN
    Finite,
    /// NaN
    Nan,
    /// Finite with no fractional part
    Integer,
}

impl ValueTest {
    /// Whether `value` satisfies this test.
    pub fn matches(&self, value: f64) -> bool {
        match self {
            ValueTest::Gt(threshold) => value > *threshold,
            ValueTest::Ge(threshold) => value >= *threshold,
            ValueTest::Lt(threshold) => value < *threshold,
            ValueTest::Le(threshold) => value <= *threshold,
            ValueTest::Eq(threshold) => value == *threshold,
            ValueTest::Ne(threshold) => value != *threshold,
            ValueTest::Positive => value > 0.0,
            ValueTest::Negative => value < 0.0,
            ValueTest::Zero => value == 0.0,
            ValueTest::Nonzero => value != 0.0,
            ValueTest::Finite => value.is_finite(),
            ValueTest::Nan => value.is_nan(),
            ValueTest::Integer => value.is_finite() && value.fract() == 0.0,
        }
    }
}

impl FromStr for ValueTest {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expr = s.trim();

        match expr.to_lowercase().as_str() {
            "positive" => return Ok(ValueTest::Positive),
            "negative" => return Ok(ValueTest::Negative),
            "zero" => return Ok(ValueTest::Zero),
            "nonzero" => return Ok(ValueTest::Nonzero),
            "finite" => return Ok(ValueTest::Finite),
            "nan" => return Ok(ValueTest::Nan),
            "integer" | "int" => return Ok(ValueTest::Integer),
            _ => {}
        }

        // Two-character operators before their one-character prefixes.
        let (operator, rest) = if let Some(rest) = expr.strip_prefix(">=") {
            (">=", rest)
        } else if let Some(rest) = expr.strip_prefix("<=") {
            ("<=", rest)
        } else if let Some(rest) = expr.strip_prefix("!=") {
            ("!=", rest)
        } else if let Some(rest) = expr.strip_prefix("==") {
            ("==", rest)
        } else if let Some(rest) = expr.strip_prefix('>') {
            (">", rest)
        } else if let Some(rest) = expr.strip_prefix('<') {
            ("<", rest)
        } else if let Some(rest) = expr.strip_prefix('=') {
            ("=", rest)
        } else {
            return Err(invalid(expr, "expected an operator or a named test"));
        };

        let threshold: f64 = rest
            .trim()
            .parse()
            .map_err(|_| invalid(expr, "expected a number after the operator"))?;

        Ok(match operator {
            ">" => ValueTest::Gt(threshold),
            ">=" => ValueTest::Ge(threshold),
            "<" => ValueTest::Lt(threshold),
            "<=" => ValueTest::Le(threshold),
            "=" | "==" => ValueTest::Eq(threshold),
            _ => ValueTest::Ne(threshold),
        })
    }
}

fn invalid(expr: &str, message: &str) -> TallyError {
    TallyError::InvalidPredicate {
        expr: expr.to_string(),
        message: message.to_string(),
    }
}

/// Conjunction of per-part tests on a complex value.
///
/// Parsed from comma-separated clauses targeting `re`, `im`, or `modulus`
/// (alias `abs`), each followed by a [`ValueTest`] expression:
/// `re>0,im>0`, `modulus<=5`, `re nonzero`. Absent parts are not
/// constrained; the empty conjunction matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComplexTest {
    /// Test on the real part
    pub re: Option<ValueTest>,
    /// Test on the imaginary part
    pub im: Option<ValueTest>,
    /// Test on the modulus
    pub modulus: Option<ValueTest>,
}

impl ComplexTest {
    /// Whether `value` satisfies every present clause.
    pub fn matches(&self, value: Complex64) -> bool {
        self.re.is_none_or(|test| test.matches(value.re))
            && self.im.is_none_or(|test| test.matches(value.im))
            && self.modulus.is_none_or(|test| test.matches(value.norm()))
    }
}

impl FromStr for ComplexTest {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut test = ComplexTest::default();

        for clause in s.split(',') {
            let clause = clause.trim();
            if clause.is_empty() {
                return Err(invalid(s, "empty clause"));
            }

            if let Some(rest) = clause.strip_prefix("re") {
                test.re = Some(rest.parse()?);
            } else if let Some(rest) = clause.strip_prefix("im") {
                test.im = Some(rest.parse()?);
            } else if let Some(rest) = clause
                .strip_prefix("modulus")
                .or_else(|| clause.strip_prefix("abs"))
            {
                test.modulus = Some(rest.parse()?);
            } else {
                return Err(invalid(s, "clause must target re, im, or modulus"));
            }
        }

        Ok(test)
    }
}
