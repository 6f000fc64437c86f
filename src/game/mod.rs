//! Rock-paper-scissors engine.
//!
//! [`GameEngine`] owns the [`GameState`] and drives a [`GameRenderer`] plus a
//! [`Confirm`] prompt. Nothing here touches the DOM; the browser adapter lives
//! in [`web`]. The engine is a two-state machine (`Playing` / `GameOver`):
//! only [`GameEngine::play_round`] can end a game and only
//! [`GameEngine::reset_game`] starts a new one.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::rng::RandomSource;

mod choices;
pub mod web;

pub use choices::{CHOICES, CLICK_SOUNDS, CONFETTI_COLORS, LOSE_SOUNDS, SoundKind, TIE_SOUNDS, WIN_SOUNDS};

pub const DEFAULT_WIN_TARGET: u32 = 5;

const SOUND_TOAST_MS: u32 = 800;
const NOTICE_TOAST_MS: u32 = 1500;
const GAME_OVER_TOAST_MS: u32 = 4000;
pub const WELCOME_TOAST_MS: u32 = 3000;

pub const WELCOME_MESSAGE: &str = "🎮 Welcome! Press R, P, or S to play!";
pub const IDLE_PROMPT: &str = "Make your move!";
pub const RESET_PROMPT: &str = "Are you sure you want to reset the game?";
const RESET_NOTICE: &str = "🔄 Game Reset! Good luck!";
const SETTINGS_NOTICE: &str = "⚙️ Settings saved!";

// --- Choices / Outcomes -----------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// The choice this one defeats (a 3-cycle).
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Choice::Rock => "✊",
            Choice::Paper => "✋",
            Choice::Scissors => "✌️",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }

    /// Lowercase key used by `data-choice` attributes.
    pub fn key(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown choice '{0}'")]
pub struct ParseChoiceError(pub String);

impl FromStr for Choice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err(ParseChoiceError(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Player,
    Computer,
    Tie,
}

pub fn determine_winner(player: Choice, computer: Choice) -> Winner {
    if player == computer {
        Winner::Tie
    } else if player.beats() == computer {
        Winner::Player
    } else {
        Winner::Computer
    }
}

/// Colour family of the result banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTone {
    Win,
    Lose,
    Tie,
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub player: Choice,
    pub computer: Choice,
    pub winner: Winner,
}

impl RoundOutcome {
    pub fn message(&self) -> String {
        match self.winner {
            Winner::Player => format!("🎉 You Win! {} beats {}!", self.player, self.computer),
            Winner::Computer => format!("💔 You Lose! {} beats {}!", self.computer, self.player),
            Winner::Tie => format!("🤝 It's a Tie! Both chose {}!", self.player),
        }
    }

    pub fn tone(&self) -> ResultTone {
        match self.winner {
            Winner::Player => ResultTone::Win,
            Winner::Computer => ResultTone::Lose,
            Winner::Tie => ResultTone::Tie,
        }
    }

    fn sound(&self) -> SoundKind {
        match self.winner {
            Winner::Player => SoundKind::Win,
            Winner::Computer => SoundKind::Lose,
            Winner::Tie => SoundKind::Tie,
        }
    }
}

/// Final score of a finished game. `winner` is never `Tie`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub winner: Winner,
    pub player_score: u32,
    pub computer_score: u32,
}

impl GameOverSummary {
    pub fn message(&self) -> String {
        match self.winner {
            Winner::Player => format!("🏆 Victory! You won {}-{}!", self.player_score, self.computer_score),
            _ => format!("😔 Game Over! Computer won {}-{}!", self.computer_score, self.player_score),
        }
    }

    pub fn restart_prompt(&self) -> &'static str {
        match self.winner {
            Winner::Player => "🎉 Congratulations! You won the game! Play again?",
            _ => "💪 Better luck next time! Try again?",
        }
    }
}

/// What a single `play_round` call did. `game_over` is set on the round that
/// ended the game, even if the player then chose to restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    pub game_over: Option<GameOverSummary>,
}

// --- Settings / State -------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("win target must be greater than zero")]
    ZeroWinTarget,
    #[error("win target '{0}' is not a positive integer")]
    InvalidWinTarget(String),
    #[error("malformed settings: {0}")]
    Malformed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub win_target: u32,
    pub sound_enabled: bool,
    pub animation_enabled: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            win_target: DEFAULT_WIN_TARGET,
            sound_enabled: true,
            animation_enabled: true,
        }
    }
}

impl GameSettings {
    pub fn new(win_target: u32, sound_enabled: bool, animation_enabled: bool) -> Result<Self, SettingsError> {
        if win_target == 0 {
            return Err(SettingsError::ZeroWinTarget);
        }
        Ok(Self {
            win_target,
            sound_enabled,
            animation_enabled,
        })
    }

    /// Build settings from the raw settings-panel fields.
    pub fn from_form(win_target: &str, sound_enabled: bool, animation_enabled: bool) -> Result<Self, SettingsError> {
        let target: u32 = win_target
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidWinTarget(win_target.to_string()))?;
        Self::new(target, sound_enabled, animation_enabled)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let parsed: GameSettings =
            serde_json::from_str(json).map_err(|e| SettingsError::Malformed(e.to_string()))?;
        Self::new(parsed.win_target, parsed.sound_enabled, parsed.animation_enabled)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub player_score: u32,
    pub computer_score: u32,
    pub round_number: u32,
    pub win_target: u32,
    pub sound_enabled: bool,
    pub animation_enabled: bool,
    pub game_over: bool,
}

impl GameState {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            player_score: 0,
            computer_score: 0,
            round_number: 1,
            win_target: settings.win_target,
            sound_enabled: settings.sound_enabled,
            animation_enabled: settings.animation_enabled,
            game_over: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game_over { Phase::GameOver } else { Phase::Playing }
    }

    pub fn settings(&self) -> GameSettings {
        GameSettings {
            win_target: self.win_target,
            sound_enabled: self.sound_enabled,
            animation_enabled: self.animation_enabled,
        }
    }

    fn target_reached(&self) -> Option<Winner> {
        if self.player_score >= self.win_target {
            Some(Winner::Player)
        } else if self.computer_score >= self.win_target {
            Some(Winner::Computer)
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

// --- Collaborators ----------------------------------------------------------

/// Presentation hooks for the game. Implementations decide how (and whether)
/// each event becomes visible.
pub trait GameRenderer {
    /// Briefly mark the button the player pressed.
    fn highlight_choice(&mut self, choice: Choice);
    fn show_round(&mut self, outcome: &RoundOutcome, animate: bool);
    fn update_scores(&mut self, state: &GameState);
    /// Return both choice slots and the banner to their idle look.
    fn clear_round(&mut self);
    fn show_toast(&mut self, message: &str, duration_ms: u32);
    /// Victory effect (confetti). Only called when animations are enabled.
    fn celebrate(&mut self);
}

/// Yes/no question to the user (restart after game over, reset request).
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Offer a new game once one has finished. `true` resets right away;
    /// adapters that ask later return `false` and reset on their own.
    fn offer_restart(&mut self, prompt: &str) -> bool {
        self.confirm(prompt)
    }
}

/// Keyboard shortcut decoded from a `KeyboardEvent.key` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Play(Choice),
    Reset,
    CloseSettings,
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "r" => Some(KeyCommand::Play(Choice::Rock)),
            "p" => Some(KeyCommand::Play(Choice::Paper)),
            "s" => Some(KeyCommand::Play(Choice::Scissors)),
            " " => Some(KeyCommand::Reset),
            "escape" => Some(KeyCommand::CloseSettings),
            _ => None,
        }
    }
}

// --- Engine -----------------------------------------------------------------

pub struct GameEngine<R, C, S> {
    state: GameState,
    renderer: R,
    confirm: C,
    rng: S,
}

impl<R, C, S> GameEngine<R, C, S>
where
    R: GameRenderer,
    C: Confirm,
    S: RandomSource,
{
    pub fn new(settings: GameSettings, renderer: R, confirm: C, rng: S) -> Self {
        Self {
            state: GameState::new(settings),
            renderer,
            confirm,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Initial paint: scores plus the welcome toast.
    pub fn welcome(&mut self) {
        self.renderer.update_scores(&self.state);
        self.renderer.show_toast(WELCOME_MESSAGE, WELCOME_TOAST_MS);
    }

    /// Play one round against a uniformly drawn computer move.
    /// Returns `None` (and does nothing) once the game is over.
    pub fn play_round(&mut self, player: Choice) -> Option<RoundReport> {
        if self.state.game_over {
            return None;
        }
        self.play_sound(SoundKind::Click);
        self.renderer.highlight_choice(player);
        let computer = CHOICES[self.rng.index(CHOICES.len())];
        Some(self.resolve(player, computer))
    }

    /// Same as [`play_round`](Self::play_round) with the computer's move fixed.
    pub fn play_round_against(&mut self, player: Choice, computer: Choice) -> Option<RoundReport> {
        if self.state.game_over {
            return None;
        }
        self.play_sound(SoundKind::Click);
        self.renderer.highlight_choice(player);
        Some(self.resolve(player, computer))
    }

    fn resolve(&mut self, player: Choice, computer: Choice) -> RoundReport {
        let winner = determine_winner(player, computer);
        match winner {
            Winner::Player => self.state.player_score += 1,
            Winner::Computer => self.state.computer_score += 1,
            Winner::Tie => {}
        }
        if winner != Winner::Tie {
            self.state.round_number += 1;
        }
        let outcome = RoundOutcome {
            player,
            computer,
            winner,
        };
        debug!(
            "round: {} vs {} -> {:?} ({}-{})",
            player, computer, winner, self.state.player_score, self.state.computer_score
        );

        self.renderer.show_round(&outcome, self.state.animation_enabled);
        self.play_sound(outcome.sound());
        self.renderer.update_scores(&self.state);

        let game_over = self.check_game_over();
        RoundReport { outcome, game_over }
    }

    fn check_game_over(&mut self) -> Option<GameOverSummary> {
        let winner = self.state.target_reached()?;
        self.state.game_over = true;
        let summary = GameOverSummary {
            winner,
            player_score: self.state.player_score,
            computer_score: self.state.computer_score,
        };
        info!("game over: {:?} wins {}-{}", winner, summary.player_score, summary.computer_score);

        if winner == Winner::Player && self.state.animation_enabled {
            self.renderer.celebrate();
        }
        self.renderer.show_toast(&summary.message(), GAME_OVER_TOAST_MS);
        if self.confirm.offer_restart(summary.restart_prompt()) {
            self.reset_game();
        }
        Some(summary)
    }

    /// Scores and round back to the start; settings are kept.
    pub fn reset_game(&mut self) {
        self.state.player_score = 0;
        self.state.computer_score = 0;
        self.state.round_number = 1;
        self.state.game_over = false;
        debug!("game reset");

        self.renderer.update_scores(&self.state);
        self.renderer.clear_round();
        self.renderer.show_toast(RESET_NOTICE, NOTICE_TOAST_MS);
    }

    /// User-initiated reset: asks first. Returns whether the game was reset.
    pub fn request_reset(&mut self) -> bool {
        if self.confirm.confirm(RESET_PROMPT) {
            self.reset_game();
            true
        } else {
            false
        }
    }

    /// Overwrite the three settings at once. Never re-evaluates game over.
    pub fn apply_settings(&mut self, settings: GameSettings) {
        self.state.win_target = settings.win_target;
        self.state.sound_enabled = settings.sound_enabled;
        self.state.animation_enabled = settings.animation_enabled;
        debug!("settings applied: {settings:?}");
        self.renderer.show_toast(SETTINGS_NOTICE, NOTICE_TOAST_MS);
    }

    fn play_sound(&mut self, kind: SoundKind) {
        if !self.state.sound_enabled {
            return;
        }
        let bank = kind.bank();
        let cue = bank[self.rng.index(bank.len())];
        self.renderer.show_toast(cue, SOUND_TOAST_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    enum Ev {
        Highlight(Choice),
        Round(RoundOutcome, bool),
        Scores(u32, u32, u32),
        Clear,
        Toast(String, u32),
        Celebrate,
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Ev>,
    }

    impl GameRenderer for Recorder {
        fn highlight_choice(&mut self, choice: Choice) {
            self.events.push(Ev::Highlight(choice));
        }
        fn show_round(&mut self, outcome: &RoundOutcome, animate: bool) {
            self.events.push(Ev::Round(*outcome, animate));
        }
        fn update_scores(&mut self, s: &GameState) {
            self.events.push(Ev::Scores(s.player_score, s.computer_score, s.round_number));
        }
        fn clear_round(&mut self) {
            self.events.push(Ev::Clear);
        }
        fn show_toast(&mut self, message: &str, duration_ms: u32) {
            self.events.push(Ev::Toast(message.to_string(), duration_ms));
        }
        fn celebrate(&mut self) {
            self.events.push(Ev::Celebrate);
        }
    }

    #[derive(Default)]
    struct Answers {
        queue: VecDeque<bool>,
        prompts: Vec<String>,
    }

    impl Confirm for Answers {
        fn confirm(&mut self, prompt: &str) -> bool {
            self.prompts.push(prompt.to_string());
            self.queue.pop_front().unwrap_or(false)
        }
    }

    fn quiet(win_target: u32) -> GameSettings {
        GameSettings::new(win_target, false, false).unwrap()
    }

    fn engine(settings: GameSettings) -> GameEngine<Recorder, Answers, SimpleRng> {
        GameEngine::new(settings, Recorder::default(), Answers::default(), SimpleRng::new(3))
    }

    #[test]
    fn beats_is_a_three_cycle() {
        for c in CHOICES {
            assert_ne!(c.beats(), c);
            assert_eq!(c.beats().beats().beats(), c);
        }
    }

    #[test]
    fn winner_table_is_antisymmetric() {
        for a in CHOICES {
            assert_eq!(determine_winner(a, a), Winner::Tie);
            for b in CHOICES {
                if a == b {
                    continue;
                }
                let ab = determine_winner(a, b);
                let ba = determine_winner(b, a);
                assert_ne!(ab, Winner::Tie);
                if a.beats() == b {
                    assert_eq!((ab, ba), (Winner::Player, Winner::Computer));
                } else {
                    assert_eq!((ab, ba), (Winner::Computer, Winner::Player));
                }
            }
        }
    }

    #[test]
    fn choice_parses_data_attribute() {
        assert_eq!("rock".parse::<Choice>(), Ok(Choice::Rock));
        assert_eq!(" Scissors ".parse::<Choice>(), Ok(Choice::Scissors));
        assert_eq!("lizard".parse::<Choice>(), Err(ParseChoiceError("lizard".into())));
    }

    #[test]
    fn single_win_ends_short_game() {
        let mut g = engine(quiet(1));
        let report = g.play_round_against(Choice::Rock, Choice::Scissors).unwrap();
        assert_eq!(report.outcome.winner, Winner::Player);
        assert_eq!(g.state().player_score, 1);
        assert!(g.state().game_over);
        assert_eq!(g.state().phase(), Phase::GameOver);
        assert_eq!(report.game_over.map(|s| s.winner), Some(Winner::Player));
    }

    #[test]
    fn tie_keeps_round_and_decisive_round_advances() {
        let mut g = engine(quiet(5));
        g.play_round_against(Choice::Paper, Choice::Paper);
        assert_eq!(g.state().round_number, 1);
        g.play_round_against(Choice::Paper, Choice::Scissors);
        assert_eq!(g.state().round_number, 2);
        assert_eq!(g.state().computer_score, 1);
    }

    #[test]
    fn play_after_game_over_is_a_no_op() {
        let mut g = engine(quiet(1));
        g.play_round_against(Choice::Scissors, Choice::Rock);
        let before = g.state().clone();
        let events_before = g.renderer().events.len();
        assert!(g.play_round(Choice::Rock).is_none());
        assert_eq!(g.state(), &before);
        assert_eq!(g.renderer().events.len(), events_before);
    }

    #[test]
    fn game_over_invariant_holds_over_random_play() {
        let mut g = engine(quiet(3));
        for i in 0..200 {
            let c = CHOICES[i % 3];
            g.play_round(c);
            let s = g.state();
            assert_eq!(s.game_over, s.player_score >= 3 || s.computer_score >= 3);
        }
    }

    #[test]
    fn accepted_restart_resets_scores() {
        let mut g = engine(quiet(1));
        g.confirm.queue.push_back(true);
        let report = g.play_round_against(Choice::Rock, Choice::Paper).unwrap();
        assert_eq!(report.game_over.map(|s| s.computer_score), Some(1));
        assert_eq!(g.confirm.prompts, vec!["💪 Better luck next time! Try again?".to_string()]);
        assert_eq!(g.state().phase(), Phase::Playing);
        assert_eq!(g.state().computer_score, 0);
    }

    #[test]
    fn reset_keeps_settings() {
        let mut g = engine(GameSettings::new(7, false, true).unwrap());
        g.play_round_against(Choice::Rock, Choice::Scissors);
        g.reset_game();
        let s = g.state();
        assert_eq!((s.player_score, s.computer_score, s.round_number, s.game_over), (0, 0, 1, false));
        assert_eq!(s.settings(), GameSettings::new(7, false, true).unwrap());
        assert!(g.renderer().events.contains(&Ev::Clear));
    }

    #[test]
    fn declined_reset_request_changes_nothing() {
        let mut g = engine(quiet(5));
        g.play_round_against(Choice::Rock, Choice::Scissors);
        assert!(!g.request_reset());
        assert_eq!(g.state().player_score, 1);
        assert_eq!(g.confirm.prompts, vec![RESET_PROMPT.to_string()]);
    }

    #[test]
    fn lowering_target_does_not_end_game() {
        let mut g = engine(quiet(5));
        g.play_round_against(Choice::Rock, Choice::Scissors);
        g.play_round_against(Choice::Rock, Choice::Scissors);
        g.apply_settings(quiet(1));
        assert_eq!(g.state().win_target, 1);
        assert!(!g.state().game_over);
        // The next decisive round does end it.
        let report = g.play_round_against(Choice::Paper, Choice::Rock).unwrap();
        assert!(report.game_over.is_some());
    }

    #[test]
    fn settings_change_after_game_over_keeps_it_over() {
        let mut g = engine(quiet(1));
        g.play_round_against(Choice::Rock, Choice::Scissors);
        assert!(g.state().game_over);
        g.apply_settings(quiet(5));
        assert!(g.state().game_over);
        assert_eq!((g.state().player_score, g.state().computer_score, g.state().round_number), (1, 0, 2));
        assert_eq!(g.state().win_target, 5);
        assert!(g.play_round(Choice::Paper).is_none());
    }

    #[test]
    fn sound_cues_only_when_enabled() {
        let mut g = engine(GameSettings::new(5, true, false).unwrap());
        g.play_round_against(Choice::Rock, Choice::Scissors);
        let cues: Vec<_> = g
            .renderer()
            .events
            .iter()
            .filter_map(|e| match e {
                Ev::Toast(m, SOUND_TOAST_MS) => Some(m.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(cues.len(), 2);
        assert!(CLICK_SOUNDS.contains(&cues[0].as_str()));
        assert!(WIN_SOUNDS.contains(&cues[1].as_str()));

        let mut muted = engine(quiet(5));
        muted.play_round_against(Choice::Rock, Choice::Scissors);
        assert!(!muted.renderer().events.iter().any(|e| matches!(e, Ev::Toast(_, SOUND_TOAST_MS))));
    }

    #[test]
    fn confetti_only_for_player_victory_with_animations() {
        let mut g = engine(GameSettings::new(1, false, true).unwrap());
        g.play_round_against(Choice::Rock, Choice::Scissors);
        assert!(g.renderer().events.contains(&Ev::Celebrate));

        let mut lost = engine(GameSettings::new(1, false, true).unwrap());
        lost.play_round_against(Choice::Rock, Choice::Paper);
        assert!(!lost.renderer().events.contains(&Ev::Celebrate));
    }

    #[test]
    fn scores_render_after_round_increment() {
        let mut g = engine(quiet(5));
        g.play_round_against(Choice::Rock, Choice::Scissors);
        assert_eq!(g.renderer().events.last(), Some(&Ev::Scores(1, 0, 2)));
    }

    #[test]
    fn result_messages() {
        let win = RoundOutcome { player: Choice::Rock, computer: Choice::Scissors, winner: Winner::Player };
        assert_eq!(win.message(), "🎉 You Win! Rock beats Scissors!");
        let lose = RoundOutcome { player: Choice::Rock, computer: Choice::Paper, winner: Winner::Computer };
        assert_eq!(lose.message(), "💔 You Lose! Paper beats Rock!");
        let tie = RoundOutcome { player: Choice::Paper, computer: Choice::Paper, winner: Winner::Tie };
        assert_eq!(tie.message(), "🤝 It's a Tie! Both chose Paper!");
        let over = GameOverSummary { winner: Winner::Computer, player_score: 2, computer_score: 5 };
        assert_eq!(over.message(), "😔 Game Over! Computer won 5-2!");
    }

    #[test]
    fn settings_validation() {
        assert_eq!(GameSettings::from_form(" 3 ", true, false), GameSettings::new(3, true, false));
        assert_eq!(GameSettings::from_form("0", true, true), Err(SettingsError::ZeroWinTarget));
        assert_eq!(
            GameSettings::from_form("abc", true, true),
            Err(SettingsError::InvalidWinTarget("abc".into()))
        );
        let parsed = GameSettings::from_json(r#"{"win_target": 10}"#).unwrap();
        assert_eq!(parsed, GameSettings::new(10, true, true).unwrap());
        assert!(matches!(GameSettings::from_json("{"), Err(SettingsError::Malformed(_))));
    }

    #[test]
    fn key_bindings() {
        assert_eq!(KeyCommand::from_key("R"), Some(KeyCommand::Play(Choice::Rock)));
        assert_eq!(KeyCommand::from_key("p"), Some(KeyCommand::Play(Choice::Paper)));
        assert_eq!(KeyCommand::from_key("s"), Some(KeyCommand::Play(Choice::Scissors)));
        assert_eq!(KeyCommand::from_key(" "), Some(KeyCommand::Reset));
        assert_eq!(KeyCommand::from_key("Escape"), Some(KeyCommand::CloseSettings));
        assert_eq!(KeyCommand::from_key("x"), None);
    }
}
