//! Recovers structured news articles from free-form search model output.
//!
//! The model is prompted for a numbered list of articles (quoted title,
//! then URL / publication date / source / summary lines) followed by a
//! "Recent Developments" section of inline links. Real completions drift
//! from that format, so extraction is best-effort: a primary pass over the
//! numbered entries, then a link-harvesting pass when the primary pass
//! comes up short. Extraction never fails; unparseable input yields an
//! empty vector and the caller decides what to do with the raw text.

use civ_core::NewsArticle;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // An entry header: "1." and a quoted title, each side tolerating
    // markdown bold. Matches both `1. "Title"` and `**1.** **"Title"**`.
    static ref ENTRY_HEADER: Regex =
        Regex::new(r#"\*{0,2}\d+\.?\*{0,2}\s*\*{0,2}"([^"]+)"\*{0,2}"#).unwrap();
    // Labeled URL line: `URL: ([label](target))`.
    static ref LABELED_URL: Regex =
        Regex::new(r"URL:\*{0,2}\s*\(\[([^\]]+)\]\(([^)]+)\)\)").unwrap();
    // Bare-URL heuristic: any parenthesized text containing a dot
    // followed by a 2+ letter token.
    static ref BARE_URL: Regex = Regex::new(r"\(([^)]+\.[a-z]{2,}[^)]*)\)").unwrap();
    static ref PUB_DATE: Regex = Regex::new(r"Publication Date:\*{0,2}\s*([^\n]+)").unwrap();
    static ref SOURCE: Regex = Regex::new(r"Source:\*{0,2}\s*([^\n]+)").unwrap();
    static ref SUMMARY: Regex = Regex::new(r"(?s)Summary:\*{0,2}\s*(.+)").unwrap();
    static ref INLINE_LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
    static ref LINK_HOST: Regex = Regex::new(r"//(?:www\.)?([^/]+)").unwrap();
}

/// Minimum number of primary-pass entries below which the link-harvesting
/// fallback kicks in.
const MIN_PRIMARY_ENTRIES: usize = 3;

const RECENT_HEADING: &str = "## Recent Developments";

/// Extracts news articles from a block of model-generated text.
///
/// Known limitation, kept on purpose: titles containing embedded quotes
/// truncate at the first closing `"`.
pub fn extract_articles(content: &str) -> Vec<NewsArticle> {
    let mut articles = Vec::new();

    // Primary pass: each entry body runs from the end of its header to
    // the start of the next header, or to the end of input.
    let headers: Vec<(std::ops::Range<usize>, &str)> = ENTRY_HEADER
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let title = caps.get(1)?.as_str();
            Some((whole.range(), title))
        })
        .collect();

    for (i, (range, title)) in headers.iter().enumerate() {
        let body_end = headers
            .get(i + 1)
            .map_or(content.len(), |(next, _)| next.start);
        let title = title.trim();
        let body = content[range.end..body_end].trim();
        if title.is_empty() || body.is_empty() {
            continue;
        }
        articles.push(parse_entry(title, body));
    }

    if articles.len() < MIN_PRIMARY_ENTRIES {
        harvest_recent_links(content, &mut articles);
    }

    tracing::debug!("extracted {} articles", articles.len());
    articles
}

fn parse_entry(title: &str, body: &str) -> NewsArticle {
    // Labeled URL first; only fall back to the bare-URL heuristic when
    // the label is absent, so prose parentheticals are not mistaken for
    // links on well-formed entries.
    let url = LABELED_URL
        .captures(body)
        .and_then(|caps| caps.get(2))
        .or_else(|| BARE_URL.captures(body).and_then(|caps| caps.get(1)))
        .map(|m| strip_query(m.as_str()).to_string())
        .unwrap_or_default();

    let date = PUB_DATE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let source = SOURCE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    // The summary runs to the next blank line or the end of the body.
    let snippet = SUMMARY
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| {
            let text = m.as_str();
            text.split("\n\n").next().unwrap_or(text).trim().to_string()
        })
        .unwrap_or_default();

    NewsArticle {
        title: title.to_string(),
        url,
        date,
        source,
        snippet,
    }
}

/// Harvests inline links from a trailing "Recent Developments" section,
/// skipping any whose title already appears in the accumulated results.
fn harvest_recent_links(content: &str, articles: &mut Vec<NewsArticle>) {
    let Some(start) = content.find(RECENT_HEADING) else {
        return;
    };
    let section = &content[start..];

    for caps in INLINE_LINK.captures_iter(section) {
        let (Some(text), Some(target)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let title = text.as_str().trim();
        if title.is_empty() || articles.iter().any(|a| a.title == title) {
            continue;
        }
        let url = strip_query(target.as_str());
        let source = LINK_HOST
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        articles.push(NewsArticle {
            title: title.to_string(),
            url: url.to_string(),
            date: String::new(),
            source,
            snippet: String::new(),
        });
    }
}

/// Drops the query string, tracking parameters included, from a URL.
fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}
