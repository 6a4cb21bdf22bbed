// src/core/html.rs
//
// Small helpers over scraper's DOM. The week grid cares about direct text
// children and exact class tokens, which the selector API alone doesn't give.

use scraper::ElementRef;

/// Text of the element's first child node, if that node is text.
/// An element child (or no children at all) yields `None`.
pub fn first_text(el: ElementRef<'_>) -> Option<&str> {
    let first = el.first_child()?;
    first.value().as_text().map(|t| &**t)
}

/// True if `class` is one of the element's class tokens.
pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Element children only, skipping text and comments.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}
