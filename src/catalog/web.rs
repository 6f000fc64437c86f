//! DOM adapter for the surah browser page.

use std::cell::RefCell;

use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlInputElement, HtmlMediaElement, HtmlSelectElement,
    MouseEvent, ScrollBehavior, ScrollToOptions, window,
};

use super::fetch::HttpFetcher;
use super::{Catalog, CatalogConfig, CatalogRenderer, ChapterCard, Fetcher, PageView, Pagination, Reciter, SortMode, Spotlight};
use crate::dom;
use crate::rng::EntropyRng;

const AUDIO_FALLBACK: &str = "Votre navigateur ne supporte pas l'élément audio.";

type WebCatalog = Catalog<DomCatalogRenderer, EntropyRng>;

thread_local! {
    static CATALOG: RefCell<Option<WebCatalog>> = const { RefCell::new(None) };
}

fn with_catalog<T>(f: impl FnOnce(&mut WebCatalog) -> T) -> Option<T> {
    CATALOG.with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

pub struct DomCatalogRenderer {
    doc: Document,
}

impl DomCatalogRenderer {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }

    fn set_display(&self, id: &str, visible: bool) {
        if let Some(el) = dom::html_by_id(&self.doc, id) {
            let _ = el.style().set_property("display", if visible { "block" } else { "none" });
        }
    }

    fn card(&self, card: &ChapterCard<'_>) -> Result<Element, JsValue> {
        let doc = &self.doc;
        let chapter = card.chapter;

        let root = dom::make(doc, "div", "surah-card", None)?;
        let header = dom::make(doc, "div", "surah-header", None)?;
        let number = dom::make(doc, "div", "surah-number", Some(&chapter.id.to_string()))?;
        header.append_child(&number)?;
        let info = dom::make(doc, "div", "surah-info", None)?;
        let arabic = dom::make(doc, "div", "surah-name-ar", Some(&chapter.name_arabic))?;
        info.append_child(&arabic)?;
        let title = dom::make(doc, "div", "surah-name-en", Some(&chapter.title_line()))?;
        info.append_child(&title)?;
        header.append_child(&info)?;
        let meta = dom::make(doc, "div", "surah-meta", Some(&chapter.meta_line()))?;
        header.append_child(&meta)?;
        root.append_child(&header)?;

        let player = dom::make(doc, "div", "audio-player", None)?;
        let audio = doc.create_element("audio")?;
        audio.set_attribute("controls", "")?;
        audio.set_attribute("preload", "none")?;
        let source = doc.create_element("source")?;
        source.set_attribute("src", &card.audio_url)?;
        source.set_attribute("type", "audio/mpeg")?;
        audio.append_child(&source)?;
        audio.append_child(&doc.create_text_node(AUDIO_FALLBACK))?;
        player.append_child(&audio)?;
        root.append_child(&player)?;
        Ok(root)
    }

    fn set_button_disabled(&self, id: &str, disabled: bool) {
        if let Some(btn) = self
            .doc
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        {
            btn.set_disabled(disabled);
        }
    }
}

impl CatalogRenderer for DomCatalogRenderer {
    fn set_loading(&mut self, loading: bool) {
        self.set_display("loading", loading);
        if loading {
            self.set_display("error", false);
        }
    }

    fn show_error(&mut self, message: &str) {
        self.set_display("error", true);
        dom::set_text(&self.doc, "error", message);
    }

    fn render_page(&mut self, page: &PageView<'_>) {
        let Some(container) = self.doc.get_element_by_id("surahContainer") else {
            return;
        };
        container.set_inner_html("");
        for card in &page.cards {
            match self.card(card) {
                Ok(el) => {
                    let _ = container.append_child(&el);
                }
                Err(err) => debug!("card {} not rendered: {err:?}", card.chapter.id),
            }
        }
    }

    fn render_pagination(&mut self, pagination: &Pagination) {
        self.set_button_disabled("prevBtn", !pagination.has_previous());
        self.set_button_disabled("nextBtn", !pagination.has_next());

        let Some(numbers) = self.doc.get_element_by_id("pageNumbers") else {
            return;
        };
        numbers.set_inner_html("");
        for page in pagination.window() {
            let class = if page == pagination.current { "page-number active" } else { "page-number" };
            let label = page.to_string();
            if let Ok(el) = dom::make(&self.doc, "div", class, Some(&label)) {
                let _ = el.set_attribute("data-page", &label);
                let _ = numbers.append_child(&el);
            }
        }
    }

    fn show_reciter(&mut self, reciter: &Reciter) {
        dom::set_text(&self.doc, "reciterName", reciter.display_name);
    }

    fn show_spotlight(&mut self, spotlight: &Spotlight) {
        dom::set_text(&self.doc, "surpriseNumber", &spotlight.heading());
        dom::set_text(&self.doc, "surpriseName", &spotlight.chapter.translated_name);
        dom::set_text(&self.doc, "surpriseReciter", spotlight.reciter_name);
        dom::set_text(&self.doc, "surpriseVerses", &spotlight.chapter.meta_line());
        if let Some(audio) = self
            .doc
            .get_element_by_id("surpriseAudio")
            .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok())
        {
            audio.set_src(&spotlight.audio_url);
        }
        if let Some(modal) = self.doc.get_element_by_id("surpriseModal") {
            let _ = modal.class_list().add_1("show");
        }
    }

    fn scroll_to_top(&mut self) {
        if let Some(win) = window() {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        }
    }
}

// --- Entry ------------------------------------------------------------------

pub fn start_catalog(config: CatalogConfig) -> Result<(), JsValue> {
    let doc = dom::document()?;
    let fetcher = HttpFetcher::new(&config);

    let mut catalog = Catalog::new(config, DomCatalogRenderer::new(doc.clone()), EntropyRng::new());
    if let Some(select) = doc
        .get_element_by_id("reciterSelect")
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    {
        catalog.select_reciter(&select.value());
    }
    CATALOG.with(|cell| cell.replace(Some(catalog)));

    wire_controls(&doc)?;
    info!("surah browser started ({})", fetcher.url());
    spawn_load(fetcher);
    Ok(())
}

fn spawn_load(fetcher: HttpFetcher) {
    let Some(ticket) = with_catalog(|c| c.begin_load()) else {
        return;
    };
    spawn_local(async move {
        let result = fetcher.fetch_chapters().await;
        with_catalog(|c| c.finish_load(ticket, result));
    });
}

fn target_element(evt: &Event) -> Option<Element> {
    evt.target().and_then(|t| t.dyn_into::<Element>().ok())
}

fn wire_controls(doc: &Document) -> Result<(), JsValue> {
    if let Some(search) = doc.get_element_by_id("searchInput") {
        dom::listen(&search, "input", |evt: Event| {
            if let Some(input) = evt.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                let query = input.value();
                with_catalog(|c| c.search(&query));
            }
        })?;
    }
    if let Some(select) = doc.get_element_by_id("reciterSelect") {
        dom::listen(&select, "change", |evt: Event| {
            if let Some(select) = evt.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                let id = select.value();
                with_catalog(|c| c.select_reciter(&id));
            }
        })?;
    }
    if let Some(select) = doc.get_element_by_id("sortSelect") {
        dom::listen(&select, "change", |evt: Event| {
            if let Some(select) = evt.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                let mode = SortMode::parse(&select.value());
                with_catalog(|c| c.sort(mode));
            }
        })?;
    }
    if let Some(btn) = doc.get_element_by_id("surpriseBtn") {
        dom::listen(&btn, "click", |_: MouseEvent| {
            with_catalog(|c| c.pick_random());
        })?;
    }
    if let Some(modal) = doc.get_element_by_id("surpriseModal") {
        let d = doc.clone();
        dom::listen(&modal, "click", move |evt: MouseEvent| {
            // Only backdrop clicks close the overlay.
            let on_backdrop = target_element(&evt).map(|el| el.id() == "surpriseModal").unwrap_or(false);
            if !on_backdrop {
                return;
            }
            if let Some(modal) = d.get_element_by_id("surpriseModal") {
                let _ = modal.class_list().remove_1("show");
            }
            if let Some(audio) = d
                .get_element_by_id("surpriseAudio")
                .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok())
            {
                let _ = audio.pause();
            }
        })?;
    }
    if let Some(prev) = doc.get_element_by_id("prevBtn") {
        dom::listen(&prev, "click", |_: MouseEvent| {
            with_catalog(|c| c.previous_page());
        })?;
    }
    if let Some(next) = doc.get_element_by_id("nextBtn") {
        dom::listen(&next, "click", |_: MouseEvent| {
            with_catalog(|c| c.next_page());
        })?;
    }
    // Indicators are rebuilt on every render, so listen once on the container.
    if let Some(numbers) = doc.get_element_by_id("pageNumbers") {
        dom::listen(&numbers, "click", |evt: MouseEvent| {
            let page = target_element(&evt)
                .and_then(|el| el.get_attribute("data-page"))
                .and_then(|raw| raw.parse::<usize>().ok());
            if let Some(page) = page {
                with_catalog(|c| c.go_to_page(page));
            }
        })?;
    }
    Ok(())
}
