use crate::guide::key::GroupKey;

/// Back-stack of guide screens a player has visited
///
/// The stack stores key and page pairs rather than live group handles,
/// so hosts can persist it or rebuild groups lazily when the player
/// walks back.
pub trait GuideHistory {
    /// Record the group the player is leaving
    fn push(&mut self, group: &GroupKey, page: u32);
}
