use crate::guide::GuideHistory;
use crate::sound::SoundEffect;

/// Host-side view of a connected player
///
/// Menus only need a name for logging and titles plus a way to play
/// sound cues. Everything else stays behind the host's own player type.
pub trait Player {
    fn name(&self) -> &str;
    /// Play a sound cue for this player only
    fn play_sound(&self, effect: &SoundEffect);
}

/// Per-player guide state owned by the host
pub trait PlayerProfile {
    /// Navigation history for the guide this profile belongs to
    fn history_mut(&mut self) -> &mut dyn GuideHistory;
}
