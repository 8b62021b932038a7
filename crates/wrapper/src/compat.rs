//! Compatibility version normalization
//!
//! Callers request behavior by release version. Only a few releases change
//! wrapping behavior, so every requested version is normalized down to the
//! newest breakpoint at or below it:
//!
//! | Requested              | Normalized | Behavior                          |
//! |------------------------|------------|-----------------------------------|
//! | `2.3.0` ..= `2.3.20`   | `2.3.0`    | deep-copy wrapping                |
//! | `2.3.21`               | `2.3.21`   | deep-copy wrapping                |
//! | `2.3.22` ..= current   | `2.3.22`   | zero-copy container adapters      |
//!
//! Anything below `2.3.0` or above [`Version::CURRENT`] is rejected.

use lumen_core::{LumenError, LumenResult, Version};

/// Versions at which wrapping behavior changes, oldest first
pub const BREAKPOINTS: [Version; 3] = [Version::V2_3_0, Version::V2_3_21, Version::V2_3_22];

/// Oldest version that can be requested
pub const OLDEST_SUPPORTED: Version = Version::V2_3_0;

/// Map a requested version onto its behavioral breakpoint
///
/// Idempotent and monotonic non-decreasing over the supported range.
///
/// # Errors
///
/// Returns [`LumenError::VersionOutOfRange`] for versions below
/// [`OLDEST_SUPPORTED`] or above [`Version::CURRENT`].
pub fn normalize_compat_version(requested: Version) -> LumenResult<Version> {
    if requested < OLDEST_SUPPORTED {
        return Err(LumenError::version_out_of_range(
            requested,
            format!("the oldest supported version is {}", OLDEST_SUPPORTED),
        ));
    }
    if requested > Version::CURRENT {
        return Err(LumenError::version_out_of_range(
            requested,
            format!("the current release is {}", Version::CURRENT),
        ));
    }
    Ok(BREAKPOINTS
        .iter()
        .rev()
        .copied()
        .find(|bp| *bp <= requested)
        .unwrap_or(OLDEST_SUPPORTED))
}

/// Default for the container-adapter flag at a normalized version
pub fn container_adapters_by_default(normalized: Version) -> bool {
    normalized >= Version::V2_3_22
}
