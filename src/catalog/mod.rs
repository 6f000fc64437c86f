//! Surah catalog: fetch once, then search / sort / paginate in memory.
//!
//! [`Catalog`] owns the full chapter list, the filtered view and the current
//! page, and pushes every change to a [`CatalogRenderer`]. The HTTP request is
//! behind the [`Fetcher`] trait. Loads are split into
//! [`Catalog::begin_load`] / [`Catalog::finish_load`] so the browser adapter
//! never holds the state borrow across an `await`; when loads overlap the
//! latest one wins and stale completions are dropped.

use async_trait::async_trait;
use log::{debug, error, info, warn};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::rng::RandomSource;

pub mod fetch;
mod pagination;
mod reciters;
pub mod web;

pub use pagination::{MAX_PAGE_INDICATORS, PAGE_SIZE, Pagination, page_bounds, total_pages};
pub use reciters::{RECITERS, Reciter, default_reciter, find_reciter, spotlight_reciter};

pub const DEFAULT_API_BASE_URL: &str = "https://api.quran.com/api/v4";
pub const DEFAULT_AUDIO_BASE_URL: &str = "https://cdn.islamic.network/quran/audio-surah/128";
pub const LOAD_ERROR_MESSAGE: &str = "Erreur lors du chargement des sourates. Veuillez réessayer.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed chapter list: {0}")]
    Malformed(String),
    #[error("invalid catalog config: {0}")]
    InvalidConfig(String),
}

// --- Data -------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Chapter {
    pub id: u16,
    pub name_arabic: String,
    pub name_simple: String,
    #[serde(deserialize_with = "nested_name")]
    pub translated_name: String,
    pub verses_count: u32,
}

fn nested_name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    struct TranslatedName {
        name: String,
    }
    TranslatedName::deserialize(d).map(|t| t.name)
}

impl Chapter {
    pub fn new(id: u16, name_arabic: &str, name_simple: &str, translated_name: &str, verses_count: u32) -> Self {
        Self {
            id,
            name_arabic: name_arabic.to_string(),
            name_simple: name_simple.to_string(),
            translated_name: translated_name.to_string(),
            verses_count,
        }
    }

    /// "Al-Fatihah - The Opener"
    pub fn title_line(&self) -> String {
        format!("{} - {}", self.name_simple, self.translated_name)
    }

    /// "7 versets · Sourate n°1"
    pub fn meta_line(&self) -> String {
        format!("{} versets · Sourate n°{}", self.verses_count, self.id)
    }

    /// `term` must already be trimmed and lowercased.
    fn matches(&self, term: &str, raw: &str) -> bool {
        self.name_simple.to_lowercase().contains(term)
            || self.name_arabic.contains(raw)
            || self.translated_name.to_lowercase().contains(term)
            || self.id.to_string() == term
    }
}

#[derive(Deserialize)]
struct ChapterList {
    chapters: Vec<Chapter>,
}

/// Parse the `/chapters` response body.
pub fn parse_chapters(body: &str) -> Result<Vec<Chapter>, CatalogError> {
    serde_json::from_str::<ChapterList>(body)
        .map(|list| list.chapters)
        .map_err(|e| CatalogError::Malformed(e.to_string()))
}

pub fn audio_url(audio_base_url: &str, reciter: &Reciter, chapter_id: u16) -> String {
    format!(
        "{}/{}/{}.mp3",
        audio_base_url.trim_end_matches('/'),
        reciter.audio_slug,
        chapter_id
    )
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub api_base_url: String,
    pub audio_base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            audio_base_url: DEFAULT_AUDIO_BASE_URL.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::InvalidConfig(e.to_string()))
    }

    pub fn chapters_url(&self) -> String {
        format!("{}/chapters", self.api_base_url.trim_end_matches('/'))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortMode {
    Default,
    Shortest,
    Longest,
}

impl SortMode {
    /// Unknown values sort by id, like the "default" option.
    pub fn parse(value: &str) -> Self {
        match value {
            "shortest" => SortMode::Shortest,
            "longest" => SortMode::Longest,
            _ => SortMode::Default,
        }
    }
}

// --- Views ------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
pub struct ChapterCard<'a> {
    pub chapter: &'a Chapter,
    pub audio_url: String,
}

/// One page of cards, ready to draw.
#[derive(Debug, PartialEq, Eq)]
pub struct PageView<'a> {
    pub page: usize,
    pub cards: Vec<ChapterCard<'a>>,
}

/// Content of the "surprise me" overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spotlight {
    pub chapter: Chapter,
    pub reciter_name: &'static str,
    pub audio_url: String,
}

impl Spotlight {
    /// "1. الفاتحة"
    pub fn heading(&self) -> String {
        format!("{}. {}", self.chapter.id, self.chapter.name_arabic)
    }
}

// --- Collaborators ----------------------------------------------------------

#[async_trait(?Send)]
pub trait Fetcher {
    async fn fetch_chapters(&self) -> Result<Vec<Chapter>, CatalogError>;
}

pub trait CatalogRenderer {
    /// Loading on: spinner shown, error hidden. Loading off: spinner hidden.
    fn set_loading(&mut self, loading: bool);
    fn show_error(&mut self, message: &str);
    fn render_page(&mut self, page: &PageView<'_>);
    fn render_pagination(&mut self, pagination: &Pagination);
    fn show_reciter(&mut self, reciter: &Reciter);
    fn show_spotlight(&mut self, spotlight: &Spotlight);
    fn scroll_to_top(&mut self);
}

/// Handle for one in-flight load; only the newest is honoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

// --- Catalog ----------------------------------------------------------------

pub struct Catalog<R, S> {
    config: CatalogConfig,
    all_items: Vec<Chapter>,
    filtered_items: Vec<Chapter>,
    current_page: usize,
    selected_reciter: &'static Reciter,
    generation: u64,
    renderer: R,
    rng: S,
}

impl<R, S> Catalog<R, S>
where
    R: CatalogRenderer,
    S: RandomSource,
{
    pub fn new(config: CatalogConfig, renderer: R, rng: S) -> Self {
        Self {
            config,
            all_items: Vec::new(),
            filtered_items: Vec::new(),
            current_page: 1,
            selected_reciter: default_reciter(),
            generation: 0,
            renderer,
            rng,
        }
    }

    pub fn all_items(&self) -> &[Chapter] {
        &self.all_items
    }

    pub fn filtered_items(&self) -> &[Chapter] {
        &self.filtered_items
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_items.len())
    }

    pub fn selected_reciter(&self) -> &'static Reciter {
        self.selected_reciter
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Fetch and install the chapter list. Failures end up on screen, never
    /// in the return value.
    pub async fn load<F: Fetcher + ?Sized>(&mut self, fetcher: &F) {
        let ticket = self.begin_load();
        let result = fetcher.fetch_chapters().await;
        self.finish_load(ticket, result);
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.renderer.set_loading(true);
        LoadTicket(self.generation)
    }

    /// Apply a load result. Returns `false` if a newer load has started since
    /// `ticket` was issued; the result is then discarded.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Chapter>, CatalogError>) -> bool {
        if ticket.0 != self.generation {
            warn!("dropping stale chapter load #{} (latest is #{})", ticket.0, self.generation);
            return false;
        }
        self.renderer.set_loading(false);
        self.current_page = 1;
        match result {
            Ok(chapters) => {
                info!("loaded {} chapters", chapters.len());
                self.all_items = chapters;
                self.filtered_items = self.all_items.clone();
                self.render();
            }
            Err(err) => {
                error!("error loading surahs: {err}");
                self.all_items.clear();
                self.filtered_items.clear();
                self.renderer.show_error(LOAD_ERROR_MESSAGE);
            }
        }
        true
    }

    /// Filter `all_items` by name, translation or exact number. Drops any
    /// previous sort.
    pub fn search(&mut self, query: &str) {
        let raw = query.trim();
        let term = raw.to_lowercase();
        self.filtered_items = if term.is_empty() {
            self.all_items.clone()
        } else {
            self.all_items.iter().filter(|c| c.matches(&term, raw)).cloned().collect()
        };
        debug!("search '{}' -> {} results", raw, self.filtered_items.len());
        self.current_page = 1;
        self.render();
    }

    /// Reorder the current filtered view (stable).
    pub fn sort(&mut self, mode: SortMode) {
        match mode {
            SortMode::Shortest => self.filtered_items.sort_by_key(|c| c.verses_count),
            SortMode::Longest => self.filtered_items.sort_by(|a, b| b.verses_count.cmp(&a.verses_count)),
            SortMode::Default => self.filtered_items.sort_by_key(|c| c.id),
        }
        self.current_page = 1;
        self.render();
    }

    /// Out-of-range pages are ignored. Returns whether the page changed hands.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        if page < 1 || page > total {
            debug!("ignoring page {page} (1..={total})");
            return false;
        }
        self.current_page = page;
        self.render();
        self.renderer.scroll_to_top();
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Switch reciter; unknown ids fall back to the default one.
    pub fn select_reciter(&mut self, id: &str) {
        self.selected_reciter = find_reciter(id).unwrap_or_else(|| {
            warn!("unknown reciter '{id}', using default");
            default_reciter()
        });
        self.renderer.show_reciter(self.selected_reciter);
        self.render();
    }

    /// Random chapter from the whole catalog, shown with the spotlight reciter.
    pub fn pick_random(&mut self) -> Option<Spotlight> {
        if self.all_items.is_empty() {
            return None;
        }
        let chapter = self.all_items[self.rng.index(self.all_items.len())].clone();
        let reciter = spotlight_reciter();
        let spotlight = Spotlight {
            audio_url: audio_url(&self.config.audio_base_url, reciter, chapter.id),
            reciter_name: reciter.display_name,
            chapter,
        };
        self.renderer.show_spotlight(&spotlight);
        Some(spotlight)
    }

    /// Current page slice with per-card audio for the selected reciter.
    pub fn page_view(&self) -> PageView<'_> {
        build_page(&self.filtered_items, self.current_page, &self.config.audio_base_url, self.selected_reciter)
    }

    fn render(&mut self) {
        let view = build_page(&self.filtered_items, self.current_page, &self.config.audio_base_url, self.selected_reciter);
        self.renderer.render_page(&view);
        let pagination = Pagination::new(self.current_page, self.filtered_items.len());
        self.renderer.render_pagination(&pagination);
    }
}

fn build_page<'a>(items: &'a [Chapter], page: usize, audio_base_url: &str, reciter: &Reciter) -> PageView<'a> {
    let cards = items[page_bounds(page, items.len())]
        .iter()
        .map(|chapter| ChapterCard {
            chapter,
            audio_url: audio_url(audio_base_url, reciter, chapter.id),
        })
        .collect();
    PageView { page, cards }
}
