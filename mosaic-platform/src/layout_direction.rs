//! Layout direction flag.

/// Horizontal layout direction of the host UI.
///
/// Passed into components at construction time instead of being read from a
/// process-wide environment object, so direction-dependent behavior is
/// deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    /// Left-to-right layout (the default).
    #[default]
    LeftToRight,
    /// Right-to-left layout.
    RightToLeft,
}

impl LayoutDirection {
    /// Whether the layout is right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}
