//! # Sitegen Intent
//!
//! Keyword-based classification of natural-language scaffolding prompts.
//! Prompts are matched against fixed bilingual (Japanese/English) keyword
//! tables; no model, no fuzziness. The result carries a confidence score so
//! callers can decide whether to trust the classification — the scaffolding
//! engine itself never gates on it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sitegen_editors::UiPattern;

/// Classified section intent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionIntent {
    /// Content kind (`articles`, `qa`, ... or `custom`).
    pub content_kind: String,
    pub ui_pattern: UiPattern,
    /// 0–1; 0.5 base, raised by recognized keywords.
    pub confidence: f32,
}

/// Page placement in the site tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Top,
    Lower,
}

/// Classified page intent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageIntent {
    pub page_kind: PageKind,
    pub confidence: f32,
}

/// Keyword → UI pattern, first match wins.
const UI_PATTERN_KEYWORDS: [(&str, UiPattern); 18] = [
    ("タブ", UiPattern::Tab),
    ("tab", UiPattern::Tab),
    ("アコーディオン", UiPattern::Accordion),
    ("accordion", UiPattern::Accordion),
    ("グリッド", UiPattern::Grid),
    ("grid", UiPattern::Grid),
    ("カード", UiPattern::Grid),
    ("card", UiPattern::Grid),
    ("カルーセル", UiPattern::Carousel),
    ("carousel", UiPattern::Carousel),
    ("スライダー", UiPattern::Carousel),
    ("slider", UiPattern::Carousel),
    ("リスト", UiPattern::List),
    ("list", UiPattern::List),
    ("モーダル", UiPattern::Modal),
    ("modal", UiPattern::Modal),
    ("ギャラリー", UiPattern::Modal),
    ("gallery", UiPattern::Modal),
];

/// Keyword → content kind, first match wins.
const CONTENT_KIND_KEYWORDS: [(&str, &str); 23] = [
    ("記事", "articles"),
    ("article", "articles"),
    ("ブログ", "articles"),
    ("blog", "articles"),
    ("カテゴリー", "categories"),
    ("カテゴリ", "categories"),
    ("categories", "categories"),
    ("category", "categories"),
    ("q&a", "qa"),
    ("qa", "qa"),
    ("質問", "qa"),
    ("faq", "qa"),
    ("機能", "features"),
    ("feature", "features"),
    ("技術", "tech"),
    ("technology", "tech"),
    ("tech", "tech"),
    ("動画", "videos"),
    ("video", "videos"),
    ("画像", "gallery"),
    ("image", "gallery"),
    ("ギャラリー", "gallery"),
    ("gallery", "gallery"),
];

/// Keyword groups that raise section confidence; one hit per group counts.
const CONFIDENCE_GROUPS: [[&str; 2]; 9] = [
    ["タブ", "tab"],
    ["アコーディオン", "accordion"],
    ["グリッド", "grid"],
    ["カード", "card"],
    ["カルーセル", "carousel"],
    ["スライダー", "slider"],
    ["リスト", "list"],
    ["モーダル", "modal"],
    ["ギャラリー", "gallery"],
];

const LOWER_PAGE_KEYWORDS: [&str; 12] = [
    "下層", "サブ", "詳細", "子ページ", "about", "service", "contact", "company", "news",
    "blog", "products", "recruit",
];

const TOP_PAGE_KEYWORDS: [&str; 6] = ["トップ", "ホーム", "top", "home", "index", "メイン"];

/// Classify a prompt into content kind, UI pattern and confidence.
#[must_use]
pub fn parse_section_intent(prompt: &str) -> SectionIntent {
    let prompt = prompt.to_lowercase();
    let ui_pattern = detect_ui_pattern(&prompt);
    let content_kind = detect_content_kind(&prompt);
    let confidence = section_confidence(&prompt, &content_kind);
    SectionIntent {
        content_kind,
        ui_pattern,
        confidence,
    }
}

fn detect_ui_pattern(prompt: &str) -> UiPattern {
    UI_PATTERN_KEYWORDS
        .iter()
        .find(|(keyword, _)| prompt.contains(keyword))
        .map_or(UiPattern::Grid, |(_, pattern)| *pattern)
}

fn detect_content_kind(prompt: &str) -> String {
    CONTENT_KIND_KEYWORDS
        .iter()
        .find(|(keyword, _)| prompt.contains(keyword))
        .map_or_else(|| "custom".to_string(), |(_, kind)| (*kind).to_string())
}

fn section_confidence(prompt: &str, content_kind: &str) -> f32 {
    let mut confidence: f32 = 0.5;
    for group in &CONFIDENCE_GROUPS {
        if group.iter().any(|keyword| prompt.contains(keyword)) {
            confidence += 0.3;
        }
    }
    if content_kind != "custom" {
        confidence += 0.2;
    }
    confidence.min(1.0)
}

/// Classify a prompt (and optional page name) into top/lower placement.
#[must_use]
pub fn parse_page_intent(prompt: &str, page_name: Option<&str>) -> PageIntent {
    let prompt = prompt.to_lowercase();

    let has_lower = LOWER_PAGE_KEYWORDS
        .iter()
        .any(|keyword| prompt.contains(keyword));
    let has_top = TOP_PAGE_KEYWORDS
        .iter()
        .any(|keyword| prompt.contains(keyword));
    let is_top_name = matches!(page_name, Some("top" | "index" | "home"));

    if has_top || is_top_name {
        return PageIntent {
            page_kind: PageKind::Top,
            confidence: if has_top { 0.9 } else { 0.7 },
        };
    }
    if has_lower {
        return PageIntent {
            page_kind: PageKind::Lower,
            confidence: 0.9,
        };
    }
    if page_name.is_some() {
        return PageIntent {
            page_kind: PageKind::Lower,
            confidence: 0.6,
        };
    }
    PageIntent {
        page_kind: PageKind::Top,
        confidence: 0.3,
    }
}
