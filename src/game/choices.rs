// Static game tables: the choice cycle and the text sound-effect banks.
use super::Choice;

/// Draw order for the computer's move.
pub static CHOICES: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

pub const WIN_SOUNDS: [&str; 5] = ["🎉", "✨", "🌟", "💫", "⭐"];
pub const LOSE_SOUNDS: [&str; 5] = ["😢", "💔", "😞", "😔", "😿"];
pub const TIE_SOUNDS: [&str; 5] = ["🤝", "⚖️", "🔄", "♻️", "🆗"];
pub const CLICK_SOUNDS: [&str; 5] = ["👆", "👉", "👇", "👈", "☝️"];

/// Kind of text "sound" cue shown as a short toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundKind {
    Win,
    Lose,
    Tie,
    Click,
}

impl SoundKind {
    pub fn bank(self) -> &'static [&'static str] {
        match self {
            SoundKind::Win => &WIN_SOUNDS,
            SoundKind::Lose => &LOSE_SOUNDS,
            SoundKind::Tie => &TIE_SOUNDS,
            SoundKind::Click => &CLICK_SOUNDS,
        }
    }
}

/// Confetti palette used by the DOM celebration effect.
pub const CONFETTI_COLORS: [&str; 6] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#f9ca24", "#6c5ce7", "#fd79a8",
];
