use crate::prelude::HashSet;

/// Decorative animations the dashboard loads alongside the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Spinner shown while the roster loads
    LoadingAnimation,
    /// Illustration shown when filters leave nothing to list
    EmptyStateAnimation,
}

impl AssetKind {
    pub fn notice(&self) -> &'static str {
        match self {
            AssetKind::LoadingAnimation => "Loading animation failed to load.",
            AssetKind::EmptyStateAnimation => "Animation failed to load.",
        }
    }
}

/// Inline notices for decorative assets that failed. Never affects data.
#[derive(Debug, Clone, Default)]
pub struct AssetNotices {
    failed: HashSet<AssetKind>,
}

impl AssetNotices {
    pub fn record_failure(&mut self, kind: AssetKind) {
        if self.failed.insert(kind) {
            log::warn!("{:?} failed to load", kind);
        }
    }

    pub fn notice_for(&self, kind: AssetKind) -> Option<&'static str> {
        self.failed.contains(&kind).then(|| kind.notice())
    }

    pub fn is_empty(&self) -> bool {
        self.failed.is_empty()
    }
}
