// SPDX-License-Identifier: MPL-2.0
//! Play/pause state of the first animation clip.

/// Clip playback position. Pausing freezes the position; it never rewinds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackState {
    playing: bool,
    clip_time: f32,
}

impl PlaybackState {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current position within the clip, in seconds.
    #[must_use]
    pub fn clip_time(&self) -> f32 {
        self.clip_time
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Advances the clip by `delta` seconds while playing, wrapping at
    /// `duration`. Clips without a positive duration stay at zero.
    pub fn advance(&mut self, delta: f32, duration: Option<f32>) {
        if !self.playing || delta <= 0.0 {
            return;
        }
        self.clip_time = match duration {
            Some(duration) if duration > 0.0 => (self.clip_time + delta).rem_euclid(duration),
            _ => 0.0,
        };
    }

    /// Rewinds to the start without changing play/pause.
    pub fn rewind(&mut self) {
        self.clip_time = 0.0;
    }
}
