//! Background audio widget constants.
//!
//! Playback, mute and the animated bars run in the browser through the
//! YouTube iframe API (`static/js/audio.js`); the server only renders the
//! initial widget.

/// YouTube video id of the ambient track.
pub const AUDIO_VIDEO_ID: &str = "6MAzUT1YhWE";

/// Number of animated sound bars.
pub const BAR_COUNT: usize = 6;

/// Player volume, 0 to 100.
pub const PLAYER_VOLUME: u8 = 60;

/// Bar height on first render, before the player reports ready.
pub const INITIAL_BAR_HEIGHT: f64 = 0.3;

/// Bar heights for the server-rendered widget.
#[must_use]
pub const fn initial_bar_heights() -> [f64; BAR_COUNT] {
    [INITIAL_BAR_HEIGHT; BAR_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_bars() {
        assert_eq!(initial_bar_heights(), [0.3; BAR_COUNT]);
    }
}
