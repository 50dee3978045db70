//! Region provider port for live droppable geometry.

use crate::board::domain::{Board, RegionSnapshot};

/// Supplies the droppable regions currently on screen.
///
/// The provider is queried at least once per pointer tick during a drag and
/// receives the *preview* board, so regions reflect speculative moves. It
/// must return regions in a stable traversal order; collision tie-breaks
/// depend on it.
pub trait RegionProvider: Send + Sync {
    /// Returns the regions for `board` as currently rendered.
    fn snapshot(&self, board: &Board) -> RegionSnapshot;
}
