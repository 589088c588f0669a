use crate::overlay::item::{Post, SearchItem};
use crate::overlay::session::SearchSession;

/// One visible row of the overlay list, in final display order.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRow<'a> {
    /// Fetch in flight; stands in for the post rows
    Loading,
    /// Non-empty query settled with zero matches
    EmptyState,
    Post(&'a Post),
    Static(&'a SearchItem),
}

impl DisplayRow<'_> {
    /// The selectable item behind this row, if any. Indicator rows resolve
    /// to `None`, which the selection handler treats as a no-op.
    pub fn selection(&self) -> Option<SearchItem> {
        match self {
            DisplayRow::Loading | DisplayRow::EmptyState => None,
            DisplayRow::Post(post) => Some(SearchItem::Post((*post).clone())),
            DisplayRow::Static(item) => Some((*item).clone()),
        }
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(self, DisplayRow::Loading | DisplayRow::EmptyState)
    }
}

/// Compose the visible list.
///
/// With a live query: the fetched posts, or a loading row while the fetch is
/// in flight, or an empty-state row once it settled with no matches. With an
/// empty query: the recommended searches. The quick actions always close the
/// list. Recommended rows never co-exist with a live query, post rows never
/// co-exist with an empty one.
pub fn compose<'a>(
    session: &'a SearchSession,
    recommended: &'a [SearchItem],
    quick_actions: &'a [SearchItem],
) -> Vec<DisplayRow<'a>> {
    let mut rows = Vec::new();

    if !session.query_text().is_empty() {
        if session.is_loading() {
            rows.push(DisplayRow::Loading);
        } else if session.posts().is_empty() {
            rows.push(DisplayRow::EmptyState);
        } else {
            rows.extend(session.posts().iter().map(DisplayRow::Post));
        }
    } else {
        rows.extend(recommended.iter().map(DisplayRow::Static));
    }

    rows.extend(quick_actions.iter().map(DisplayRow::Static));
    rows
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod display_tests;
