use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::state::App;
use crate::overlay::display::DisplayRow;
use crate::overlay::item::{Post, SearchItem};
use crate::theme;
use crate::widgets::popup;

/// Fixed column width of one recommended card
const CARD_WIDTH: usize = 24;

// Overlay popup display constants
const OVERLAY_WIDTH: u16 = 72;
const OVERLAY_HEIGHT: u16 = 20;
const INPUT_HEIGHT: u16 = 3;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.render_start_screen(frame);

        // Render the overlay last so it covers the page behind it
        if self.session.is_open() {
            self.render_overlay(frame);
        }
    }

    fn render_start_screen(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(2), // masthead
            Constraint::Length(5), // recommended strip
            Constraint::Min(0),    // filler
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

        self.render_masthead(frame, layout[0]);
        self.render_strip(frame, layout[1]);
        self.render_footer(frame, layout[3]);
    }

    fn render_masthead(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(
                "siteseek",
                Style::default()
                    .fg(theme::start::TITLE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  —  press / to search",
                Style::default().fg(theme::start::HINT),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }

    /// Render the horizontally snapped strip of recommended searches
    fn render_strip(&mut self, frame: &mut Frame, area: Rect) {
        let labels: Vec<String> = self
            .recommended()
            .iter()
            .map(|item| item.label().to_string())
            .collect();

        // Refresh the scroll surface from this frame's layout before reading
        // the boundary flags
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::start::STRIP_BORDER))
            .title(" Recommended ");
        let inner = block.inner(area);

        let total_width = (labels.len() * CARD_WIDTH) as f64;
        if let Some(strip) = self.slider.container_mut() {
            strip.set_metrics(f64::from(inner.width), total_width);
        }
        self.slider.on_scroll();

        let arrow_style = |disabled: bool| {
            Style::default().fg(if disabled {
                theme::start::ARROW_DISABLED
            } else {
                theme::start::ARROW_ACTIVE
            })
        };
        let arrows = Line::from(vec![
            Span::styled("‹ ", arrow_style(self.slider.is_at_start())),
            Span::styled("›", arrow_style(self.slider.is_at_end())),
            Span::raw(" "),
        ])
        .right_aligned();

        frame.render_widget(block.title(arrows), area);

        if labels.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No recommended searches configured",
                Style::default().fg(theme::palette::TEXT_DIM),
            ));
            frame.render_widget(empty, inner);
            return;
        }

        let width = CARD_WIDTH;
        let cards: Vec<Span> = labels
            .iter()
            .map(|label| {
                let label: String = label.chars().take(width - 4).collect();
                Span::styled(
                    format!("{:^width$}", format!("○ {label}")),
                    Style::default().fg(theme::start::STRIP_CARD),
                )
            })
            .collect();

        let offset = self
            .slider
            .container()
            .map(|strip| strip.offset().round() as u16)
            .unwrap_or(0);
        let strip_line = Paragraph::new(Line::from(cards)).scroll((0, offset));
        frame.render_widget(strip_line, inner);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = match self.config_warning() {
            Some(warning) => Span::styled(
                format!("⚠ {warning}"),
                Style::default().fg(theme::start::CONFIG_WARNING),
            ),
            None => Span::styled(
                "/ search  ·  ←/→ browse  ·  q quit",
                Style::default().fg(theme::start::HINT),
            ),
        };
        frame.render_widget(Paragraph::new(Line::from(footer)), area);
    }

    fn render_overlay(&mut self, frame: &mut Frame) {
        let area = popup::centered_popup(frame.area(), OVERLAY_WIDTH, OVERLAY_HEIGHT);
        popup::clear_area(frame, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::overlay::BORDER))
            .style(Style::default().bg(theme::palette::BG_SURFACE));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout =
            Layout::vertical([Constraint::Length(INPUT_HEIGHT), Constraint::Min(1)]).split(inner);

        frame.render_widget(&self.input.textarea, layout[0]);
        self.render_result_list(frame, layout[1]);
    }

    fn render_result_list(&self, frame: &mut Frame, area: Rect) {
        let rows = self.rows();
        let visible = area.height as usize;

        // Keep the selection in view
        let start = self.selected.saturating_sub(visible.saturating_sub(1));

        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
            .map(|(i, row)| {
                let item = ListItem::new(row_line(row, self.session.query_text()));
                if i == self.selected && row.is_selectable() {
                    item.style(theme::overlay::SELECTED)
                } else {
                    item
                }
            })
            .collect();

        frame.render_widget(List::new(items), area);
    }
}

fn row_line(row: &DisplayRow, query_text: &str) -> Line<'static> {
    match row {
        DisplayRow::Loading => Line::from(Span::styled(
            "  Searching…",
            Style::default()
                .fg(theme::overlay::LOADING)
                .add_modifier(Modifier::ITALIC),
        )),
        DisplayRow::EmptyState => Line::from(Span::styled(
            format!("  No results for \"{query_text}\""),
            Style::default().fg(theme::overlay::EMPTY_STATE),
        )),
        DisplayRow::Post(post) => post_line(post),
        DisplayRow::Static(item) => static_line(item),
    }
}

fn post_line(post: &Post) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", post.format.glyph()),
            Style::default().fg(theme::overlay::POST_GLYPH),
        ),
        // Title is rendered as received, markup included
        Span::styled(
            post.title.clone(),
            Style::default().fg(theme::overlay::POST_TITLE),
        ),
    ];

    let mut meta = Vec::new();
    if let Some(author) = &post.author_name {
        meta.push(author.clone());
    }
    if let Some(date) = post.published_at {
        meta.push(date.format("%b %d, %Y").to_string());
    }
    if !meta.is_empty() {
        spans.push(Span::styled(
            format!("  {}", meta.join(" · ")),
            Style::default().fg(theme::overlay::POST_META),
        ));
    }

    Line::from(spans)
}

fn static_line(item: &SearchItem) -> Line<'static> {
    match item {
        SearchItem::QuickAction { label, .. } => Line::from(vec![
            Span::styled(" ↗ ", Style::default().fg(theme::overlay::QUICK_ACTION)),
            Span::styled(
                (*label).to_string(),
                Style::default().fg(theme::overlay::QUICK_ACTION),
            ),
        ]),
        SearchItem::Recommended { label, .. } => Line::from(vec![
            Span::styled(" ○ ", Style::default().fg(theme::overlay::RECOMMENDED)),
            Span::styled(
                label.clone(),
                Style::default().fg(theme::overlay::RECOMMENDED),
            ),
        ]),
        // compose() never places posts in the static sections, but the
        // match stays total
        SearchItem::Post(post) => post_line(post),
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
