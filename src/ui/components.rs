//! Presentation components - pure functions of their inputs

use ratatui::{prelude::*, widgets::*};

use crate::constants::{BRAND_NAME, CAR_IMAGE_ALT};
use crate::models::{months_and_days, AlertKind};
use crate::ui::layout;

/// Brand colors
pub mod palette {
    use ratatui::style::Color;

    pub const PRIMARY: Color = Color::Rgb(11, 51, 85);
    pub const ACCENT: Color = Color::Rgb(255, 122, 0);
    pub const TEXT: Color = Color::Rgb(15, 23, 42);
    pub const SUCCESS: Color = Color::Rgb(16, 185, 129);
    pub const WARNING: Color = Color::Rgb(245, 158, 11);
    pub const ERROR: Color = Color::Rgb(239, 68, 68);
    pub const INFO: Color = Color::Rgb(30, 64, 175);
    pub const MUTED: Color = Color::Rgb(100, 116, 139);
    pub const DISABLED: Color = Color::Rgb(203, 213, 225);
}

/// Bordered section card
pub fn card(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::MUTED))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(palette::MUTED),
        ))
}

/// Filled button label, optionally prefixed with its shortcut key
pub fn button(label: &str, key: Option<char>, bg: Color) -> Span<'static> {
    let text = match key {
        Some(k) => format!(" [{}] {} ", k, label),
        None => format!(" {} ", label),
    };
    Span::styled(text, Style::default().fg(Color::White).bg(bg).bold())
}

/// Outlined secondary button
pub fn outline_button(label: &str, key: Option<char>) -> Span<'static> {
    let text = match key {
        Some(k) => format!("[{}] {}", k, label),
        None => format!("[ {} ]", label),
    };
    Span::styled(text, Style::default().fg(palette::TEXT))
}

pub fn alert<'a>(kind: AlertKind, title: &'a str, text: &'a str) -> Paragraph<'a> {
    let color = match kind {
        AlertKind::Info => palette::INFO,
        AlertKind::Warning => palette::WARNING,
        AlertKind::Error => palette::ERROR,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));

    Paragraph::new(vec![
        Line::from(Span::styled(title, Style::default().fg(color).bold())),
        Line::from(Span::styled(text, Style::default().fg(color))),
    ])
    .block(block)
    .wrap(Wrap { trim: true })
}

/// Dark strip on top with key hints
pub fn draw_status_strip(f: &mut Frame, area: Rect, hints: &str) {
    let strip = Paragraph::new(hints)
        .style(Style::default().fg(palette::DISABLED).bg(palette::TEXT))
        .alignment(Alignment::Right);
    f.render_widget(strip, area);
}

/// Header with brand, remaining contract time and the notification bell
pub fn draw_header(f: &mut Frame, area: Rect, days_left: u32) {
    let (months, days) = months_and_days(days_left);
    let style = Style::default().fg(Color::White).bg(palette::PRIMARY);
    f.render_widget(Block::default().style(style), area);

    let inner = area.inner(Margin::new(2, 1));
    let remaining = format!("Jäljellä {} kk {} pv", months, days);
    let right = Line::from(vec![
        Span::raw(remaining),
        Span::raw("  "),
        Span::styled(" [b] Ilmoitukset ", Style::default().fg(Color::White).bg(palette::TEXT)),
    ]);
    let right_width = right.width() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(inner);

    f.render_widget(Paragraph::new(Span::raw(BRAND_NAME).bold()).style(style), chunks[0]);
    f.render_widget(Paragraph::new(right).style(style), chunks[1]);
}

/// Bottom navigation. Only the profile button is wired.
pub fn draw_bottom_bar(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::MUTED));
    f.render_widget(block, layout::main_layout(area).bottom);

    let labels = ["Koti", "Hakemus", "Vika", "Profiili (p)"];
    for (label, rect) in labels.iter().zip(layout::bottom_bar_buttons(area)) {
        let item = Paragraph::new(*label).alignment(Alignment::Center);
        f.render_widget(item, rect);
    }
}

/// Vehicle picture placeholder: the external image cannot be shown in a
/// terminal, so it is drawn as art captioned with its alt text
pub fn vehicle_picture() -> Paragraph<'static> {
    const ART: [&str; 4] = [
        r"   ______",
        r"  /|_||_\`.__",
        r" (   _    _ _\",
        r" =`-(_)--(_)-'",
    ];
    let lines: Vec<Line> = ART.iter().map(|l| Line::from(*l)).collect();
    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::DISABLED))
            .title_bottom(Line::from(CAR_IMAGE_ALT).centered()),
    )
}

/// Generic dismissible modal frame. Returns the content area.
pub fn draw_modal_shell(f: &mut Frame, area: Rect, title: &str) -> Rect {
    let modal = layout::modal_area(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(format!(" {} ", title), Style::default().bold()))
        .title_top(Line::from(" ✕ ").right_aligned())
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(modal);
    f.render_widget(Clear, modal);
    f.render_widget(block, modal);
    inner
}

/// Toast line above the bottom bar
pub fn draw_toast(f: &mut Frame, area: Rect, message: &str) {
    let width = Span::raw(message).width() as u16;
    let rect = layout::toast_area(area, width);
    let toast = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(palette::TEXT));
    f.render_widget(Clear, rect);
    f.render_widget(toast, rect);
}
