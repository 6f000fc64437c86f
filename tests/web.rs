// Browser tests for the DOM adapters: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys::{Document, window};

use shifumi_sourates::catalog::web::DomCatalogRenderer;
use shifumi_sourates::catalog::{CatalogRenderer, Chapter, ChapterCard, PageView, Pagination};
use shifumi_sourates::game::web::DomGameRenderer;
use shifumi_sourates::game::{GameRenderer, GameSettings, GameState};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    window().and_then(|w| w.document()).unwrap()
}

fn mount(doc: &Document, id: &str) {
    if doc.get_element_by_id(id).is_some() {
        return;
    }
    let el = doc.create_element("div").unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
}

#[wasm_bindgen_test]
fn scoreboard_and_toast() {
    let doc = document();
    for id in ["player-score", "computer-score", "round-number", "toast"] {
        mount(&doc, id);
    }
    let mut renderer = DomGameRenderer::new(doc.clone());
    let mut state = GameState::new(GameSettings::default());
    state.player_score = 2;
    state.round_number = 4;
    renderer.update_scores(&state);
    renderer.show_toast("hello", 50);

    let text = |id: &str| doc.get_element_by_id(id).and_then(|e| e.text_content()).unwrap();
    assert_eq!(text("player-score"), "2");
    assert_eq!(text("computer-score"), "0");
    assert_eq!(text("round-number"), "4");
    assert_eq!(text("toast"), "hello");
    assert!(doc.get_element_by_id("toast").unwrap().class_list().contains("show"));
}

#[wasm_bindgen_test]
fn cards_and_page_indicators() {
    let doc = document();
    for id in ["surahContainer", "pageNumbers"] {
        mount(&doc, id);
    }
    let mut renderer = DomCatalogRenderer::new(doc.clone());
    let chapter = Chapter::new(1, "الفاتحة", "Al-Fatihah", "The Opener", 7);
    renderer.render_page(&PageView {
        page: 1,
        cards: vec![ChapterCard {
            chapter: &chapter,
            audio_url: "https://cdn.example/ar.alafasy/1.mp3".into(),
        }],
    });
    renderer.render_pagination(&Pagination::new(2, 12));

    let container = doc.get_element_by_id("surahContainer").unwrap();
    assert_eq!(container.query_selector_all(".surah-card").unwrap().length(), 1);
    let title = container.query_selector(".surah-name-en").unwrap().unwrap();
    assert_eq!(title.text_content().as_deref(), Some("Al-Fatihah - The Opener"));
    let number = container.query_selector(".surah-number").unwrap().unwrap();
    assert_eq!(number.text_content().as_deref(), Some("1"));
    let audio = container.query_selector("audio").unwrap().unwrap();
    assert_eq!(audio.get_attribute("preload").as_deref(), Some("none"));
    assert_eq!(audio.child_nodes().length(), 2);
    let source = container.query_selector("source").unwrap().unwrap();
    assert_eq!(source.get_attribute("src").as_deref(), Some("https://cdn.example/ar.alafasy/1.mp3"));

    let numbers = doc.get_element_by_id("pageNumbers").unwrap();
    assert_eq!(numbers.query_selector_all(".page-number").unwrap().length(), 3);
    let active = numbers.query_selector(".page-number.active").unwrap().unwrap();
    assert_eq!(active.get_attribute("data-page").as_deref(), Some("2"));
}
