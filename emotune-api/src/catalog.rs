//! Static music catalog
//!
//! Fixed per-emotion playlists, the demo stand-in for a real
//! recommendation engine. Lookup is by canonical emotion; label
//! normalization happens in the handler, so every label resolves to some
//! playlist.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use emotune_common::api::Song;
use emotune_engine::Emotion;

fn song(
    id: &str,
    title: &str,
    artist: &str,
    file_path: &str,
    duration: u32,
    emotion_tags: &[&str],
    therapeutic_score: f64,
) -> Song {
    Song {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        file_path: file_path.to_string(),
        duration,
        emotion_tags: emotion_tags.iter().map(|t| t.to_string()).collect(),
        therapeutic_score,
    }
}

static CATALOG: Lazy<HashMap<Emotion, Vec<Song>>> = Lazy::new(|| {
    let mut catalog = HashMap::new();

    catalog.insert(
        Emotion::Happy,
        vec![
            song("s1", "Sunshine Melody", "Happy Tunes", "music/happy/sunshine.mp3", 180, &["happy", "energetic"], 0.9),
            song("s2", "Golden Hour", "The Brightsiders", "music/happy/golden_hour.mp3", 210, &["happy", "uplifting"], 0.88),
            song("s3", "Step Lightly", "Milo Vance", "music/happy/step_lightly.mp3", 195, &["happy", "playful"], 0.82),
        ],
    );

    catalog.insert(
        Emotion::Sad,
        vec![
            song("s4", "Healing Rain", "Calm Sounds", "music/sad/healing.mp3", 240, &["sad", "calming"], 0.85),
            song("s5", "Quiet Harbor", "Elena Mora", "music/sad/quiet_harbor.mp3", 265, &["sad", "comforting"], 0.87),
            song("s6", "After the Storm", "Low Tide Trio", "music/sad/after_the_storm.mp3", 230, &["sad", "hopeful"], 0.8),
        ],
    );

    catalog.insert(
        Emotion::Anxious,
        vec![
            song("s7", "Peaceful Waters", "Meditation Masters", "music/calm/peaceful.mp3", 300, &["calm", "meditation"], 0.95),
            song("s8", "Slow Breathing", "Stillpoint", "music/calm/slow_breathing.mp3", 320, &["calm", "grounding"], 0.92),
            song("s9", "Night Garden", "Aria Fen", "music/calm/night_garden.mp3", 275, &["calm", "soothing"], 0.88),
        ],
    );

    catalog.insert(
        Emotion::Calm,
        vec![
            song("s10", "Morning Dew", "Field Recordings Co.", "music/calm/morning_dew.mp3", 250, &["calm", "ambient"], 0.9),
            song("s11", "Drifting", "Saltwater Choir", "music/calm/drifting.mp3", 285, &["calm", "gentle"], 0.86),
        ],
    );

    catalog.insert(
        Emotion::Angry,
        vec![
            song("s12", "Unclench", "The Slow Release", "music/angry/unclench.mp3", 220, &["calming", "deceleration"], 0.89),
            song("s13", "Cooling Embers", "Ashlight", "music/angry/cooling_embers.mp3", 260, &["calming", "warm"], 0.84),
        ],
    );

    catalog
});

/// Playlist for one canonical emotion
pub fn playlist_for(emotion: Emotion) -> Vec<Song> {
    CATALOG.get(&emotion).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_emotion_has_a_playlist() {
        for emotion in Emotion::ALL {
            let songs = playlist_for(emotion);
            assert!(!songs.is_empty(), "no playlist for {}", emotion);
        }
    }

    #[test]
    fn test_song_ids_are_unique() {
        let mut ids = std::collections::HashSet::new();
        for emotion in Emotion::ALL {
            for song in playlist_for(emotion) {
                assert!(ids.insert(song.id.clone()), "duplicate song id {}", song.id);
            }
        }
    }

    #[test]
    fn test_therapeutic_scores_in_range() {
        for emotion in Emotion::ALL {
            for song in playlist_for(emotion) {
                assert!((0.0..=1.0).contains(&song.therapeutic_score));
                assert!(song.duration > 0);
            }
        }
    }
}
