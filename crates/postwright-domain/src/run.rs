//! Run identifiers for log correlation

use std::fmt;

/// Unique identifier for one pipeline run, based on UUIDv7
///
/// A fresh `RunId` is generated when a run starts and appears in every
/// log line the run emits. It is never persisted; nothing outlives the
/// run that created it.
///
/// # Examples
///
/// ```
/// use postwright_domain::RunId;
///
/// let id = RunId::new();
/// assert_eq!(id.to_string().len(), 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(u128);

impl RunId {
    /// Generate a new UUIDv7-based RunId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_ids_are_unique() {
        let a = RunId::new();
        let b = RunId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_run_ids_sort_chronologically() {
        let earlier = RunId::new();
        let later = RunId::new();
        assert!(earlier <= later);
    }
}
