//! Tool version parsing and ordering

use regex::Regex;
use std::fmt;

/// Pattern the tool prints in its `--version` banner.
const VERSION_PATTERN: &str = r"cmake version (\d+)\.(\d+)\.(\d+)";

/// A `<major>.<minor>.<patch>` triple.
///
/// Field order gives the derived `Ord` lexicographic triple comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToolVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ToolVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extracts the first version triple from free-form `--version` output.
    ///
    /// Returns `None` when the banner does not contain the pattern or a
    /// component does not fit in a `u32`.
    pub fn parse(output: &str) -> Option<Self> {
        let re = Regex::new(VERSION_PATTERN).ok()?;
        let caps = re.captures(output)?;

        let component = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
        Some(Self::new(component(1)?, component(2)?, component(3)?))
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
