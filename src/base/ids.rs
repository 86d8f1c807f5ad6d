//! Identifier service: node ids, instance ids and primitive interning rules.

use std::fmt;
use std::str::FromStr;

use smol_str::{SmolStr, format_smolstr};
use uuid::Uuid;

/// Number of decimals kept when rounding numeric inner values.
pub const DECIMAL_PRECISION: u32 = 5;

/// Id prefix for interned number instances.
const NUMBER_PREFIX: &str = "N!";

/// Id prefix for interned string instances.
const STRING_PREFIX: &str = "S!";

/// Name of a node, field or module. Cheap to clone and compare.
pub type Name = SmolStr;

/// Unique identifier of a linked node.
///
/// Ids are minted by the external linker via [`NodeId::fresh`] and are
/// unique across one environment. The textual form is the hyphenated
/// UUID, which is what appears after `#` in synthetic qualified names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Mint a fresh, globally unique id.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

impl FromStr for NodeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Identifier of a runtime instance.
///
/// Interned primitives reuse their canonical value as the id (`N!` for
/// numbers at [`DECIMAL_PRECISION`] decimals, `S!` for strings), so two
/// structurally equal primitives always share one id. Every other
/// instance gets a fresh UUID, which never collides with the interning
/// prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceId(SmolStr);

impl InstanceId {
    /// Mint a fresh, never-interned id.
    pub fn fresh() -> Self {
        Self(format_smolstr!("{}", Uuid::new_v4().as_hyphenated()))
    }

    /// Canonical id for a number. The value is rounded first; callers
    /// that also store the value must round it the same way.
    pub fn number(value: f64) -> Self {
        let rounded = round_decimals(value);
        Self(format_smolstr!(
            "{NUMBER_PREFIX}{rounded:.precision$}",
            precision = DECIMAL_PRECISION as usize
        ))
    }

    /// Canonical id for a string.
    pub fn text(value: &str) -> Self {
        Self(format_smolstr!("{STRING_PREFIX}{value}"))
    }

    /// Whether this id denotes an interned primitive.
    pub fn is_interned(&self) -> bool {
        self.0.starts_with(NUMBER_PREFIX) || self.0.starts_with(STRING_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Round to [`DECIMAL_PRECISION`] decimals, half away from zero.
///
/// Negative zero normalises to zero so both spellings intern to one
/// instance. NaN stays NaN; all NaN spellings share the canonical form.
pub fn round_decimals(value: f64) -> f64 {
    let factor = 10f64.powi(DECIMAL_PRECISION as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}
