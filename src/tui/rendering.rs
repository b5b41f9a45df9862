use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{MessageType, SideView, StatusMessage};
use super::layout::AppLayout;
use super::palette::Palette;
use super::timestamps::format_elapsed;
use crate::models::Category;
use crate::pool::ActivityPool;
use crate::state::AppState;
use crate::timer::format_mm_ss;

/// Everything one frame needs, borrowed from the app
pub struct RenderState<'a> {
    pub state: &'a AppState,
    pub pool: &'a ActivityPool,
    pub cursor: usize,
    pub side_view: SideView,
    pub timer_minutes: u64,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, render: &RenderState) {
    let layout = AppLayout::new(frame.area());
    let palette = Palette::for_theme(render.state.theme());

    // Paint the theme background behind every widget
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        frame.area(),
    );

    render_header(frame, layout.header_area, render, &palette);
    render_categories(frame, layout.categories_area, render, &palette);
    render_result(frame, layout.result_area, render, &palette);
    match render.side_view {
        SideView::History => render_history(frame, layout.side_area, render.state, &palette),
        SideView::Favorites => render_favorites(frame, layout.side_area, render.state, &palette),
    }
    render_status_bar(frame, layout.status_area, render.status_message, &palette);
}

fn bordered<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
        .title(title)
}

fn render_header(frame: &mut Frame, area: Rect, render: &RenderState, palette: &Palette) {
    let header = Line::from(vec![
        Span::styled(
            " 🎯 Activity Suggester ",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("| theme: {} ", render.state.theme()),
            Style::default().fg(palette.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(header).style(Style::default().bg(palette.background)), area);
}

fn render_categories(frame: &mut Frame, area: Rect, render: &RenderState, palette: &Palette) {
    let items: Vec<ListItem> = Category::all()
        .into_iter()
        .enumerate()
        .map(|(idx, category)| {
            let checkbox = if render.state.is_selected(category) { "[x]" } else { "[ ]" };
            let count = render.pool.activities(category).len();
            let content =
                format!("{} {} {} ({})", checkbox, category.icon(), category.label(), count);

            let style = if idx == render.cursor {
                Style::default()
                    .fg(palette.highlight_text)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else if render.state.is_selected(category) {
                Style::default().fg(palette.text)
            } else {
                Style::default().fg(palette.muted)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let title = format!(" Categories ({} selected) ", render.state.selected().len());
    let list = List::new(items).block(bordered(&title, palette));
    frame.render_widget(list, area);
}

fn render_result(frame: &mut Frame, area: Rect, render: &RenderState, palette: &Palette) {
    let state = render.state;
    let mut lines = Vec::new();

    if state.is_generating() {
        lines.push(Line::styled(
            "Finding something to do…",
            Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
        ));
    } else if let Some(current) = state.current() {
        let star = if state.is_favorite(&current.activity) { " ★" } else { "" };
        lines.push(Line::styled(
            format!("{}{}", current.activity, star),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ));
    } else {
        lines.push(Line::styled(
            "Pick categories with Space, then press Enter",
            Style::default().fg(palette.muted),
        ));
    }

    lines.push(Line::from(""));
    let timer_line = match state.timer() {
        Some(timer) if timer.is_finished() => {
            Span::styled("⏰ Time's up!", Style::default().fg(palette.success))
        }
        Some(timer) => Span::styled(
            format!("⏱ {} remaining (of {})", timer.display(), format_mm_ss(timer.total_secs())),
            Style::default().fg(palette.accent),
        ),
        None => Span::styled(
            format!("⏱ {} (t: start, p: length)", format_mm_ss(render.timer_minutes.saturating_mul(60))),
            Style::default().fg(palette.muted),
        ),
    };
    lines.push(Line::from(timer_line));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(bordered(" Suggestion ", palette))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_history(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let now = Utc::now();
    let items: Vec<ListItem> = state
        .history()
        .iter()
        .map(|entry| {
            let icons: String = entry.categories.iter().map(|c| c.icon()).collect();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>9} ", format_elapsed(&entry.timestamp, &now)),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(entry.activity.clone(), Style::default().fg(palette.text)),
                Span::styled(format!(" {}", icons), Style::default().fg(palette.muted)),
            ]))
        })
        .collect();

    let list = List::new(items).block(bordered(" History (Tab: favorites) ", palette));
    frame.render_widget(list, area);
}

fn render_favorites(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let items: Vec<ListItem> = if state.favorites().is_empty() {
        vec![ListItem::new("No favorites yet (f: add current)").style(Style::default().fg(palette.muted))]
    } else {
        state
            .favorites()
            .iter()
            .map(|favorite| {
                ListItem::new(format!("★ {}", favorite)).style(Style::default().fg(palette.text))
            })
            .collect()
    };

    let list = List::new(items).block(bordered(" Favorites (Tab: history) ", palette));
    frame.render_widget(list, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_message: Option<&StatusMessage>,
    palette: &Palette,
) {
    let (text, style) = match status_message {
        Some(msg) => {
            let color = match msg.message_type {
                MessageType::Success => palette.success,
                MessageType::Error => palette.error,
            };
            (format!(" {} ", msg.text), Style::default().fg(color).bg(palette.background))
        }
        None => (
            " Space: toggle | a/c: all/clear | Enter: suggest | f: favorite | s: share | t/x/p: timer | T: theme | q: quit "
                .to_string(),
            Style::default().fg(palette.muted).bg(palette.background),
        ),
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
