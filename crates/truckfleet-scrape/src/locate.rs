//! Finding the continent heading that owns a list table
//!
//! The manufacturer page has no explicit link between a table and its
//! section, so the label is recovered from the surrounding document
//! structure. Both strategies are layout-dependent; keep them behind
//! [`SectionLocator`] so extraction does not care which one runs.

use scraper::ElementRef;
use truckfleet_types::SectionStrategy;

pub trait SectionLocator {
    /// Section label for `table`, e.g. "North America"
    fn locate(&self, table: ElementRef<'_>) -> Option<String>;
}

/// Walks back a fixed number of sibling nodes (text nodes included) from
/// the table's parent and reads the `id` of the first `span` found there.
/// If that node has no such span, walks back `fallback` more and retries.
#[derive(Debug, Clone)]
pub struct SiblingOffsetLocator {
    pub offset: usize,
    pub fallback: usize,
}

impl Default for SiblingOffsetLocator {
    fn default() -> Self {
        Self {
            offset: 4,
            fallback: 2,
        }
    }
}

impl SectionLocator for SiblingOffsetLocator {
    fn locate(&self, table: ElementRef<'_>) -> Option<String> {
        let mut node = table.parent()?;
        for steps in [self.offset, self.fallback] {
            for _ in 0..steps {
                node = node.prev_sibling()?;
            }
            if let Some(label) = ElementRef::wrap(node).and_then(first_span_id) {
                return Some(label);
            }
        }
        None
    }
}

/// Walks backwards through siblings, then the parent's siblings, until a
/// heading element is found. Handles headings wrapped in `div.mw-heading`.
#[derive(Debug, Clone)]
pub struct NearestHeadingLocator {
    pub levels: Vec<String>,
}

impl Default for NearestHeadingLocator {
    fn default() -> Self {
        Self {
            levels: vec!["h2".to_string(), "h3".to_string()],
        }
    }
}

impl NearestHeadingLocator {
    fn is_heading(&self, el: ElementRef<'_>) -> bool {
        let name = el.value().name();
        self.levels.iter().any(|l| l == name)
    }

    fn heading_label(&self, el: ElementRef<'_>) -> Option<String> {
        let heading = if self.is_heading(el) {
            el
        } else if el.value().name() == "div" && el.value().classes().any(|c| c == "mw-heading") {
            el.children()
                .filter_map(ElementRef::wrap)
                .find(|child| self.is_heading(*child))?
        } else {
            return None;
        };

        let label = heading
            .value()
            .attr("id")
            .map(|id| id.replace('_', " "))
            .or_else(|| first_span_id(heading))
            .unwrap_or_else(|| heading.text().collect::<String>().trim().to_string());
        (!label.is_empty()).then_some(label)
    }
}

impl SectionLocator for NearestHeadingLocator {
    fn locate(&self, table: ElementRef<'_>) -> Option<String> {
        let mut node = *table;
        loop {
            while let Some(prev) = node.prev_sibling() {
                node = prev;
                if let Some(label) = ElementRef::wrap(node).and_then(|el| self.heading_label(el)) {
                    return Some(label);
                }
            }
            node = node.parent()?;
        }
    }
}

/// `id` of the first descendant `span`, underscores turned into spaces
fn first_span_id(el: ElementRef<'_>) -> Option<String> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "span")
        .and_then(|span| span.value().attr("id"))
        .map(|id| id.replace('_', " "))
}

pub fn locator_for(strategy: SectionStrategy) -> Box<dyn SectionLocator> {
    match strategy {
        SectionStrategy::Offset => Box::new(SiblingOffsetLocator::default()),
        SectionStrategy::Nearest => Box::new(NearestHeadingLocator::default()),
    }
}
