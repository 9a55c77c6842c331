//! Active platform filter set

use std::collections::BTreeSet;

use crate::models::Platform;

/// Platforms currently toggled on. Empty means no platform constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet(BTreeSet<Platform>);

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `platform` when `active`, remove it otherwise
    pub fn set_active(&mut self, platform: Platform, active: bool) {
        if active {
            self.0.insert(platform);
        } else {
            self.0.remove(&platform);
        }
    }

    #[must_use]
    pub fn contains(&self, platform: Platform) -> bool {
        self.0.contains(&platform)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether an entry on `platforms` passes this filter
    #[must_use]
    pub fn admits(&self, platforms: &[Platform]) -> bool {
        self.is_empty() || platforms.iter().any(|platform| self.contains(*platform))
    }
}

impl FromIterator<Platform> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Platform>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_then_deactivate_restores_set() {
        let mut filters: FilterSet = [Platform::Blog].into_iter().collect();
        let before = filters.clone();

        filters.set_active(Platform::YouTube, true);
        assert!(filters.contains(Platform::YouTube));
        filters.set_active(Platform::YouTube, false);
        assert_eq!(filters, before);
    }

    #[test]
    fn set_active_is_idempotent() {
        let mut filters = FilterSet::new();
        filters.set_active(Platform::Podcast, true);
        filters.set_active(Platform::Podcast, true);
        assert_eq!(filters.len(), 1);

        filters.set_active(Platform::Podcast, false);
        filters.set_active(Platform::Podcast, false);
        assert!(filters.is_empty());
    }

    #[test]
    fn activation_order_does_not_matter() {
        let mut first = FilterSet::new();
        first.set_active(Platform::Facebook, true);
        first.set_active(Platform::Podcast, true);

        let mut second = FilterSet::new();
        second.set_active(Platform::Podcast, true);
        second.set_active(Platform::Facebook, true);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_set_admits_everything() {
        let filters = FilterSet::new();
        assert!(filters.admits(&[]));
        assert!(filters.admits(&[Platform::Other]));
    }

    #[test]
    fn admits_requires_intersection() {
        let filters: FilterSet = [Platform::GitHub].into_iter().collect();
        assert!(filters.admits(&[Platform::Blog, Platform::GitHub]));
        assert!(!filters.admits(&[Platform::Blog]));
        assert!(!filters.admits(&[]));
    }
}
