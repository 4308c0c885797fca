//! Sound cues
//!
//! The core never plays audio. It reports what happened in a tick and the
//! frontend turns that into [`SoundEffect`]s for whatever backend it uses.

use crate::sim::TickEvents;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball served or returned by a paddle
    PaddleHit,
    /// Point scored
    Score,
    /// Match won
    Victory,
}

impl SoundEffect {
    /// Conventional asset file name for sample-based backends
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "pong_hit.wav",
            SoundEffect::Score => "pong_score.wav",
            SoundEffect::Victory => "pong_win.wav",
        }
    }
}

/// Cues to play for one tick, in order
pub fn cues(events: &TickEvents) -> Vec<SoundEffect> {
    let mut out = Vec::new();
    if events.launched.is_some() || events.paddle_hit {
        out.push(SoundEffect::PaddleHit);
    }
    // The winning point plays the victory sting instead of the score cue
    if events.winner.is_some() {
        out.push(SoundEffect::Victory);
    } else if events.scored.is_some() {
        out.push(SoundEffect::Score);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    #[test]
    fn test_quiet_tick_has_no_cues() {
        assert!(cues(&TickEvents::default()).is_empty());
    }

    #[test]
    fn test_launch_and_hit_share_a_cue() {
        let launch = TickEvents {
            launched: Some(Side::Left),
            ..Default::default()
        };
        assert_eq!(cues(&launch), vec![SoundEffect::PaddleHit]);

        let hit = TickEvents {
            paddle_hit: true,
            ..Default::default()
        };
        assert_eq!(cues(&hit), vec![SoundEffect::PaddleHit]);
    }

    #[test]
    fn test_winning_point_plays_victory_only() {
        let point = TickEvents {
            scored: Some(Side::Right),
            ..Default::default()
        };
        assert_eq!(cues(&point), vec![SoundEffect::Score]);

        let match_point = TickEvents {
            scored: Some(Side::Right),
            winner: Some(Side::Right),
            ..Default::default()
        };
        assert_eq!(cues(&match_point), vec![SoundEffect::Victory]);
    }

    #[test]
    fn test_asset_names() {
        assert_eq!(SoundEffect::Score.asset_name(), "pong_score.wav");
    }
}
