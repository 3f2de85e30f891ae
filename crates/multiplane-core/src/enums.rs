//! Enumeration types used throughout the pipeline.

use serde::{Deserialize, Serialize};

/// Source of an aircraft's vertical offset, ordered by precedence.
///
/// The derived `Ord` is the precedence ranking: a later variant always wins
/// over an earlier one. Adding a source is a closed, exhaustive change.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum OffsetSource {
    /// No offset configured; effective offset is 0.0.
    #[default]
    None,
    /// Offset read from the model file itself.
    Model,
    /// Offset read from the model's material/texture metadata.
    Material,
    /// Offset from user preferences (highest precedence).
    Preference,
}

impl OffsetSource {
    /// Number of sources, for enum-indexed storage.
    pub const COUNT: usize = 4;

    /// Storage index for per-source offset values.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Which downstream surveillance channel design to drive.
///
/// The two designs are historical alternatives with the same ranking and
/// truncation semantics; the variant is selected once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelVariant {
    /// Small multiplexed per-slot registers, capacity discovered by probing.
    Legacy,
    /// Direct fixed-capacity override channel (63 slots).
    #[default]
    Modern,
}
