//! Test vectors.
//!
//! A vector is one stimulus plus its expected result and carry, stored as raw
//! integers so that files may contain anything; inputs are validated against
//! the input policy when the vector is applied.
//!
//! JSON format (an array of objects):
//!
//! ```json
//! [
//!   { "a": 5, "b": 3, "op": 0, "result": 8, "carry": 0, "description": "ADD: 5+3" }
//! ]
//! ```
//!
//! `op` may also be a mnemonic string such as `"add"`.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::common::error::{AluError, Operand, VectorError};
use crate::common::Nibble;
use crate::config::InputPolicy;
use crate::isa::Opcode;

/// One directed test case.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TestVector {
    /// Operand A.
    pub a: u8,
    /// Operand B.
    pub b: u8,
    /// Opcode encoding.
    #[serde(deserialize_with = "deserialize_op")]
    pub op: u8,
    /// Expected result.
    pub result: u8,
    /// Expected carry (0 or 1).
    pub carry: u8,
    /// Human-readable label.
    #[serde(default)]
    pub description: String,
}

impl TestVector {
    /// Creates a vector.
    pub fn new(a: u8, b: u8, op: u8, result: u8, carry: u8, description: impl Into<String>) -> Self {
        Self {
            a,
            b,
            op,
            result,
            carry,
            description: description.into(),
        }
    }

    /// Converts the raw inputs to typed ALU inputs under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`AluError`] if `policy` rejects an operand or the opcode.
    pub fn inputs(&self, policy: InputPolicy) -> Result<(Nibble, Nibble, Opcode), AluError> {
        Ok((
            policy.operand(self.a, Operand::A)?,
            policy.operand(self.b, Operand::B)?,
            policy.opcode(self.op)?,
        ))
    }
}

impl fmt::Display for TestVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (a={} b={} op={} -> result={} carry={})",
            self.description, self.a, self.b, self.op, self.result, self.carry
        )
    }
}

/// Accepts either a numeric opcode or a mnemonic string.
fn deserialize_op<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    struct OpVisitor;

    impl Visitor<'_> for OpVisitor {
        type Value = u8;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an opcode number or mnemonic")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u8, E> {
            u8::try_from(v).map_err(|_| E::custom(format!("opcode {v} does not fit in a byte")))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u8, E> {
            Opcode::from_str(v).map(Opcode::bits).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(OpVisitor)
}

/// Reads a JSON array of vectors from `path`.
///
/// # Errors
///
/// Returns [`VectorError::Io`] if the file cannot be read and
/// [`VectorError::Parse`] if it is not a valid vector array.
pub fn load_vectors(path: impl AsRef<Path>) -> Result<Vec<TestVector>, VectorError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| VectorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let vectors: Vec<TestVector> =
        serde_json::from_str(&text).map_err(|source| VectorError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), count = vectors.len(), "loaded test vectors");
    Ok(vectors)
}

/// Built-in directed suites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suite {
    /// Addition and subtraction smoke test.
    Basic,
    /// One or two cases per operation, including carry/borrow cases.
    AllOperations,
    /// Boundary values (0 and 15) for every operation.
    EdgeCases,
    /// All of the above, in order.
    All,
}

impl Suite {
    /// Returns the vectors of this suite.
    pub fn vectors(self) -> Vec<TestVector> {
        match self {
            Self::Basic => basic(),
            Self::AllOperations => all_operations(),
            Self::EdgeCases => edge_cases(),
            Self::All => {
                let mut v = basic();
                v.extend(all_operations());
                v.extend(edge_cases());
                v
            }
        }
    }

    /// Short name of the suite.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::AllOperations => "all-operations",
            Self::EdgeCases => "edge-cases",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "all-operations" | "all_operations" => Ok(Self::AllOperations),
            "edge-cases" | "edge_cases" => Ok(Self::EdgeCases),
            "all" => Ok(Self::All),
            other => Err(format!("unknown suite {other:?}")),
        }
    }
}

fn basic() -> Vec<TestVector> {
    vec![
        TestVector::new(5, 3, 0, 8, 0, "ADD: 5+3"),
        TestVector::new(10, 6, 1, 4, 0, "SUB: 10-6"),
    ]
}

fn all_operations() -> Vec<TestVector> {
    vec![
        TestVector::new(5, 3, 0, 8, 0, "ADD: 5+3"),
        TestVector::new(15, 1, 0, 0, 1, "ADD with overflow: 15+1"),
        TestVector::new(10, 6, 1, 4, 0, "SUB: 10-6"),
        TestVector::new(3, 5, 1, 14, 1, "SUB with underflow: 3-5"),
        TestVector::new(12, 10, 2, 8, 0, "AND: 1100&1010=1000"),
        TestVector::new(12, 3, 3, 15, 0, "OR: 1100|0011=1111"),
        TestVector::new(10, 5, 4, 15, 0, "XOR: 1010^0101=1111"),
        TestVector::new(10, 0, 5, 5, 0, "NOT: ~1010=0101"),
        TestVector::new(6, 0, 6, 12, 0, "SHIFT: 0110<<1=1100"),
        TestVector::new(9, 0, 6, 2, 1, "SHIFT with carry: 1001<<1=0010"),
        TestVector::new(5, 5, 7, 1, 1, "EQUAL: 5==5"),
        TestVector::new(5, 7, 7, 0, 0, "NOT EQUAL: 5==7"),
    ]
}

fn edge_cases() -> Vec<TestVector> {
    vec![
        TestVector::new(0, 0, 0, 0, 0, "Zero + Zero"),
        TestVector::new(15, 15, 0, 14, 1, "Max + Max (overflow)"),
        TestVector::new(0, 15, 1, 1, 1, "Zero - Max (underflow)"),
        TestVector::new(15, 0, 2, 0, 0, "Max AND Zero"),
        TestVector::new(0, 0, 3, 0, 0, "Zero OR Zero"),
        TestVector::new(15, 15, 4, 0, 0, "Max XOR Max"),
        TestVector::new(0, 0, 5, 15, 0, "NOT Zero = Max"),
        TestVector::new(15, 0, 5, 0, 0, "NOT Max = Zero"),
        TestVector::new(8, 0, 6, 0, 1, "Shift with MSB set"),
        TestVector::new(0, 0, 7, 1, 1, "Zero == Zero"),
    ]
}
