//! DOM adapter for the shifumi page.
//!
//! Expects the page's element ids (`player-score`, `battle-result`, `toast`,
//! `settings-panel`, ...) and `.choice-btn[data-choice]` buttons. Missing
//! optional elements are skipped.

use std::cell::RefCell;

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent, window};

use super::{
    CONFETTI_COLORS, Choice, Confirm, GameEngine, GameRenderer, GameSettings, GameState, IDLE_PROMPT,
    KeyCommand, ResultTone, RoundOutcome, Winner,
};
use crate::dom;
use crate::rng::{EntropyRng, RandomSource};

const PARTICLE_COUNT: usize = 30;
const CONFETTI_COUNT: usize = 50;
const CONFETTI_LIFETIME_MS: u32 = 3000;
const HIGHLIGHT_MS: u32 = 500;
const RESTART_DELAY_MS: u32 = 1000;
const ANIMATION_CLASSES: [&str; 3] = ["shake", "win-animation", "lose-animation"];
const UNKNOWN_CHOICE: &str = "❓";

type WebGame = GameEngine<DomGameRenderer, WindowConfirm, EntropyRng>;

thread_local! {
    static GAME: RefCell<Option<WebGame>> = const { RefCell::new(None) };
}

fn with_game<T>(f: impl FnOnce(&mut WebGame) -> T) -> Option<T> {
    GAME.with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

fn tone_color(tone: ResultTone) -> &'static str {
    match tone {
        ResultTone::Win => "#10b981",
        ResultTone::Lose => "#ef4444",
        ResultTone::Tie => "#f59e0b",
        ResultTone::Idle => "#1e293b",
    }
}

pub struct DomGameRenderer {
    doc: Document,
    rng: EntropyRng,
}

impl DomGameRenderer {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            rng: EntropyRng::new(),
        }
    }

    /// Floating background particles (decoration only).
    pub fn init_particles(&mut self) -> Result<(), JsValue> {
        let Some(container) = self.doc.get_element_by_id("particles") else {
            return Ok(());
        };
        for _ in 0..PARTICLE_COUNT {
            let p = dom::make(&self.doc, "div", "particle", None)?;
            let style = format!(
                "left:{:.2}%; animation-delay:{:.2}s; animation-duration:{:.2}s;",
                self.rng.unit() * 100.0,
                self.rng.unit() * 15.0,
                10.0 + self.rng.unit() * 10.0
            );
            p.set_attribute("style", &style)?;
            container.append_child(&p)?;
        }
        Ok(())
    }

    fn result_text(&self) -> Option<HtmlElement> {
        let banner = self.doc.get_element_by_id("battle-result")?;
        let text = banner.query_selector(".result-text").ok()??;
        text.dyn_into::<HtmlElement>().ok()
    }

    fn set_result(&self, message: &str, tone: ResultTone) {
        if let Some(text) = self.result_text() {
            text.set_text_content(Some(message));
            let _ = text.style().set_property("color", tone_color(tone));
        }
    }
}

fn restart_animation(el: &HtmlElement, class: &str) {
    let classes = el.class_list();
    for c in ANIMATION_CLASSES {
        let _ = classes.remove_1(c);
    }
    // Reading layout forces a reflow so the animation replays.
    let _ = el.offset_width();
    let _ = classes.add_1(class);
}

impl GameRenderer for DomGameRenderer {
    fn highlight_choice(&mut self, choice: Choice) {
        if let Ok(buttons) = self.doc.query_selector_all(".choice-btn") {
            for i in 0..buttons.length() {
                if let Some(btn) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    let _ = btn.class_list().remove_1("selected");
                }
            }
        }
        let selector = format!("[data-choice=\"{}\"]", choice.key());
        if let Ok(Some(btn)) = self.doc.query_selector(&selector) {
            let _ = btn.class_list().add_1("selected");
            dom::after_ms(HIGHLIGHT_MS, move || {
                let _ = btn.class_list().remove_1("selected");
            });
        }
    }

    fn show_round(&mut self, outcome: &RoundOutcome, animate: bool) {
        let player = dom::html_by_id(&self.doc, "player-choice-emoji");
        let computer = dom::html_by_id(&self.doc, "computer-choice-emoji");
        if let (Some(player), Some(computer)) = (player, computer) {
            player.set_text_content(Some(outcome.player.emoji()));
            computer.set_text_content(Some(outcome.computer.emoji()));
            if animate {
                let (p_class, c_class) = match outcome.winner {
                    Winner::Player => ("win-animation", "lose-animation"),
                    Winner::Computer => ("lose-animation", "win-animation"),
                    Winner::Tie => ("shake", "shake"),
                };
                restart_animation(&player, p_class);
                restart_animation(&computer, c_class);
            }
        }
        self.set_result(&outcome.message(), outcome.tone());
    }

    fn update_scores(&mut self, state: &GameState) {
        dom::set_text(&self.doc, "player-score", &state.player_score.to_string());
        dom::set_text(&self.doc, "computer-score", &state.computer_score.to_string());
        dom::set_text(&self.doc, "round-number", &state.round_number.to_string());
    }

    fn clear_round(&mut self) {
        dom::set_text(&self.doc, "player-choice-emoji", UNKNOWN_CHOICE);
        dom::set_text(&self.doc, "computer-choice-emoji", UNKNOWN_CHOICE);
        self.set_result(IDLE_PROMPT, ResultTone::Idle);
    }

    fn show_toast(&mut self, message: &str, duration_ms: u32) {
        let Some(toast) = self.doc.get_element_by_id("toast") else {
            return;
        };
        toast.set_text_content(Some(message));
        let _ = toast.class_list().add_1("show");
        dom::after_ms(duration_ms, move || {
            let _ = toast.class_list().remove_1("show");
        });
    }

    fn celebrate(&mut self) {
        let Some(container) = self.doc.get_element_by_id("confetti-container") else {
            return;
        };
        for _ in 0..CONFETTI_COUNT {
            let Ok(piece) = dom::make(&self.doc, "div", "confetti-piece", None) else {
                continue;
            };
            let color = CONFETTI_COLORS[self.rng.index(CONFETTI_COLORS.len())];
            let style = format!(
                "left:{:.2}%; background-color:{}; animation-delay:{:.2}s; animation-duration:{:.2}s;",
                self.rng.unit() * 100.0,
                color,
                self.rng.unit() * 0.5,
                2.0 + self.rng.unit()
            );
            if piece.set_attribute("style", &style).is_err() || container.append_child(&piece).is_err() {
                continue;
            }
            dom::after_ms(CONFETTI_LIFETIME_MS, move || piece.remove());
        }
    }
}

/// `window.confirm`; the game-over offer is asked after a short pause so the
/// final score and toast are painted first.
pub struct WindowConfirm;

fn ask(prompt: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

impl Confirm for WindowConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        ask(prompt)
    }

    fn offer_restart(&mut self, prompt: &str) -> bool {
        let prompt = prompt.to_string();
        dom::after_ms(RESTART_DELAY_MS, move || {
            if ask(&prompt) {
                with_game(|g| g.reset_game());
            }
        });
        false
    }
}

// --- Settings panel ---------------------------------------------------------

fn checkbox(doc: &Document, id: &str) -> Option<bool> {
    let input = doc.get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()?;
    Some(input.checked())
}

fn read_form(doc: &Document) -> Option<(String, bool, bool)> {
    let target = doc.get_element_by_id("win-target")?.dyn_into::<HtmlInputElement>().ok()?;
    Some((target.value(), checkbox(doc, "sound-toggle")?, checkbox(doc, "animation-toggle")?))
}

fn write_form(doc: &Document, settings: GameSettings) {
    if let Some(target) = doc
        .get_element_by_id("win-target")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        target.set_value(&settings.win_target.to_string());
    }
    for (id, on) in [
        ("sound-toggle", settings.sound_enabled),
        ("animation-toggle", settings.animation_enabled),
    ] {
        if let Some(input) = doc.get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) {
            input.set_checked(on);
        }
    }
}

fn apply_form_settings(doc: &Document) {
    let Some((target, sound, animation)) = read_form(doc) else {
        warn!("settings form is incomplete; keeping current settings");
        return;
    };
    match GameSettings::from_form(&target, sound, animation) {
        Ok(settings) => {
            with_game(|g| g.apply_settings(settings));
        }
        Err(err) => warn!("settings rejected: {err}"),
    }
}

fn settings_open(doc: &Document) -> bool {
    doc.get_element_by_id("settings-panel")
        .map(|panel| panel.class_list().contains("active"))
        .unwrap_or(false)
}

fn toggle_settings(doc: &Document) {
    if let Some(panel) = doc.get_element_by_id("settings-panel") {
        let _ = panel.class_list().toggle("active");
    }
}

// --- Entry ------------------------------------------------------------------

pub fn start_game(settings: GameSettings) -> Result<(), JsValue> {
    let doc = dom::document()?;

    let mut renderer = DomGameRenderer::new(doc.clone());
    renderer.init_particles()?;
    write_form(&doc, settings);

    let mut engine = GameEngine::new(settings, renderer, WindowConfirm, EntropyRng::new());
    engine.welcome();
    GAME.with(|cell| cell.replace(Some(engine)));

    wire_choice_buttons(&doc)?;
    wire_controls(&doc)?;
    wire_keyboard(&doc)?;
    info!("shifumi started, first to {}", settings.win_target);
    Ok(())
}

fn wire_choice_buttons(doc: &Document) -> Result<(), JsValue> {
    let buttons = doc.query_selector_all(".choice-btn")?;
    for i in 0..buttons.length() {
        let Some(btn) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(raw) = btn.get_attribute("data-choice") else {
            continue;
        };
        let choice = match raw.parse::<Choice>() {
            Ok(c) => c,
            Err(err) => {
                warn!("skipping button: {err}");
                continue;
            }
        };
        dom::listen(&btn, "click", move |_: MouseEvent| {
            with_game(|g| g.play_round(choice));
        })?;
    }
    Ok(())
}

fn wire_controls(doc: &Document) -> Result<(), JsValue> {
    if let Some(reset) = doc.get_element_by_id("reset-btn") {
        dom::listen(&reset, "click", |_: MouseEvent| {
            with_game(|g| g.request_reset());
        })?;
    }
    if let Some(open) = doc.get_element_by_id("settings-btn") {
        let d = doc.clone();
        dom::listen(&open, "click", move |_: MouseEvent| toggle_settings(&d))?;
    }
    if let Some(close) = doc.get_element_by_id("close-settings") {
        let d = doc.clone();
        dom::listen(&close, "click", move |_: MouseEvent| {
            apply_form_settings(&d);
            toggle_settings(&d);
        })?;
    }
    for id in ["win-target", "sound-toggle", "animation-toggle"] {
        if let Some(input) = doc.get_element_by_id(id) {
            let d = doc.clone();
            dom::listen(&input, "change", move |_: web_sys::Event| apply_form_settings(&d))?;
        }
    }
    Ok(())
}

fn wire_keyboard(doc: &Document) -> Result<(), JsValue> {
    let d = doc.clone();
    dom::listen(doc, "keydown", move |evt: KeyboardEvent| match KeyCommand::from_key(&evt.key()) {
        Some(KeyCommand::Play(choice)) => {
            with_game(|g| g.play_round(choice));
        }
        Some(KeyCommand::Reset) => {
            evt.prevent_default();
            with_game(|g| g.request_reset());
        }
        Some(KeyCommand::CloseSettings) => {
            if settings_open(&d) {
                apply_form_settings(&d);
                toggle_settings(&d);
            }
        }
        None => {}
    })
}
