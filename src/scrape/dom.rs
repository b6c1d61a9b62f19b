//! Selector helpers over the `scraper` crate
//!
//! Every extractor in this crate is a fixed table of "query selector, take
//! text or attribute" steps. These helpers implement that vocabulary once:
//! a selector that matches nothing (or fails to compile) degrades to an
//! empty string or `None`, never to an error, so a page with drifted markup
//! produces a partially empty record instead of a failure.

use scraper::{ElementRef, Selector};

/// Parses a selector string, treating an invalid selector as a guaranteed miss
fn sel(selector: &str) -> Option<Selector> {
    Selector::parse(selector).ok()
}

/// Collected, trimmed text content of an element
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first descendant matching `selector`, or `""`
pub fn first_text(scope: ElementRef<'_>, selector: &str) -> String {
    sel(selector)
        .and_then(|s| scope.select(&s).next())
        .map(element_text)
        .unwrap_or_default()
}

/// Attribute value of the first descendant matching `selector`
///
/// Returns `None` when either the element or the attribute is absent.
pub fn first_attr(scope: ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    let s = sel(selector)?;
    scope
        .select(&s)
        .next()
        .and_then(|e| e.value().attr(attr))
        .map(|v| v.trim().to_string())
}

/// All descendants matching `selector`, in document order
pub fn select_all<'a>(scope: ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    match sel(selector) {
        Some(s) => scope.select(&s).collect(),
        None => Vec::new(),
    }
}

/// First descendant matching `selector` whose text contains `needle`
///
/// Substring match on the element's collected text, the `:contains()` idiom.
pub fn find_containing<'a>(
    scope: ElementRef<'a>,
    selector: &str,
    needle: &str,
) -> Option<ElementRef<'a>> {
    let s = sel(selector)?;
    scope
        .select(&s)
        .find(|e| e.text().collect::<String>().contains(needle))
}

/// Immediately following sibling element, if it matches `selector`
///
/// Intervening text nodes are skipped; an element sibling that does not
/// match the selector is a miss, not a cue to scan further.
pub fn next_matching<'a>(element: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let s = sel(selector)?;
    next_element(element).filter(|e| s.matches(e))
}

/// Immediately preceding sibling element, if it matches `selector`
pub fn prev_matching<'a>(element: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let s = sel(selector)?;
    prev_element(element).filter(|e| s.matches(e))
}

/// "Label containing text, take the adjacent value" lookup
///
/// Finds the first element matching `label_selector` whose text contains
/// `needle`, then returns the trimmed text of its immediately following
/// sibling element matching `value_selector`. Empty string if any step
/// misses.
pub fn labeled_next(
    scope: ElementRef<'_>,
    label_selector: &str,
    needle: &str,
    value_selector: &str,
) -> String {
    find_containing(scope, label_selector, needle)
        .and_then(|label| next_matching(label, value_selector))
        .map(element_text)
        .unwrap_or_default()
}

/// As [`labeled_next`], but the value precedes its label in the markup
pub fn labeled_prev(
    scope: ElementRef<'_>,
    label_selector: &str,
    needle: &str,
    value_selector: &str,
) -> String {
    find_containing(scope, label_selector, needle)
        .and_then(|label| prev_matching(label, value_selector))
        .map(element_text)
        .unwrap_or_default()
}

/// As [`labeled_next`], but reads text from a descendant of the value element
pub fn labeled_next_nested(
    scope: ElementRef<'_>,
    label_selector: &str,
    needle: &str,
    value_selector: &str,
    inner_selector: &str,
) -> String {
    find_containing(scope, label_selector, needle)
        .and_then(|label| next_matching(label, value_selector))
        .map(|value| first_text(value, inner_selector))
        .unwrap_or_default()
}

/// First sibling element after `element` in document order
fn next_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let mut node = element.next_sibling();
    while let Some(n) = node {
        if let Some(e) = ElementRef::wrap(n) {
            return Some(e);
        }
        node = n.next_sibling();
    }
    None
}

/// First sibling element before `element` in document order
fn prev_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let mut node = element.prev_sibling();
    while let Some(n) = node {
        if let Some(e) = ElementRef::wrap(n) {
            return Some(e);
        }
        node = n.prev_sibling();
    }
    None
}
