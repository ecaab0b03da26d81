//! Shareable metadata for `neon_core::lang` registries.
//!
//! Registries in `neon_core::lang` are **registry-first** vocabularies: a stable identifier enum plus a `const`
//! metadata table. This submodule provides the small, dependency-free metadata types reused by those tables.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; the scanner still decides what it emits.

/// Identify the toolchain version a vocabulary item is available since.
///
/// ## Notes
/// - This is a free-form string (e.g. `"0.1.0"`).
///
/// ## Examples
/// ```rust
/// use neon_core::lang::registry::SinceVersion;
///
/// let since: SinceVersion = "0.1.0";
/// assert!(!since.is_empty());
/// ```
pub type SinceVersion = &'static str;

/// The first released vocabulary version.
pub const SINCE_0_1: SinceVersion = "0.1.0";

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - Intended for docs/tooling (e.g. to flag deprecated kinds in generated tables), not for feature-gating.
///
/// ## Examples
/// ```rust
/// use neon_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(s.as_str(), "stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

impl Stability {
    /// Return the lowercase label used in generated reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Draft => "draft",
            Stability::Deprecated => "deprecated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stability_labels() {
        assert_eq!(Stability::Stable.as_str(), "stable");
        assert_eq!(Stability::Draft.as_str(), "draft");
        assert_eq!(Stability::Deprecated.as_str(), "deprecated");
    }
}
