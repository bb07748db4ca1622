//! Screen geometry shared by drawing and mouse hit testing

use ratatui::prelude::*;

use crate::models::Tab;

/// Regions of the main screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MainLayout {
    pub status: Rect,
    pub header: Rect,
    pub nav: Rect,
    pub content: Rect,
    pub bottom: Rect,
}

pub fn main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status strip
            Constraint::Length(3), // Header
            Constraint::Length(1), // Navigation tabs
            Constraint::Min(0),    // Section body
            Constraint::Length(3), // Bottom bar
        ])
        .split(area);

    MainLayout {
        status: chunks[0],
        header: chunks[1],
        nav: chunks[2],
        content: chunks[3],
        bottom: chunks[4],
    }
}

/// Text of a navigation tab, padded
pub fn nav_tab_text(tab: Tab) -> String {
    format!(" {} ", tab.label())
}

/// Position of every navigation tab
pub fn nav_tab_rects(area: Rect) -> Vec<(Tab, Rect)> {
    let nav = main_layout(area).nav;
    let right = nav.x + nav.width;
    let mut x = nav.x + 1;
    let mut rects = Vec::new();

    for tab in Tab::NAV {
        let width = Span::raw(nav_tab_text(tab)).width() as u16;
        if x >= right {
            break;
        }
        let width = width.min(right - x);
        rects.push((tab, Rect::new(x, nav.y, width, 1)));
        x = x.saturating_add(width + 1);
    }
    rects
}

pub fn tab_at(area: Rect, column: u16, row: u16) -> Option<Tab> {
    nav_tab_rects(area)
        .into_iter()
        .find(|(_, rect)| contains(*rect, column, row))
        .map(|(tab, _)| tab)
}

/// Bottom bar buttons: home, application, issue, profile
pub fn bottom_bar_buttons(area: Rect) -> Vec<Rect> {
    let bottom = main_layout(area).bottom;
    let inner = bottom.inner(Margin::new(1, 1));
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner)
        .to_vec()
}

pub fn profile_button_hit(area: Rect, column: u16, row: u16) -> bool {
    bottom_bar_buttons(area)
        .last()
        .is_some_and(|rect| contains(*rect, column, row))
}

/// Box of a modal dialog
pub fn modal_area(area: Rect) -> Rect {
    centered_rect(80, 80, area)
}

/// The ✕ on the modal's top border
pub fn modal_close_button(modal: Rect) -> Rect {
    Rect::new(modal.x + modal.width.saturating_sub(4), modal.y, 3.min(modal.width), 1)
}

/// Line just above the bottom bar, centered, for the toast
pub fn toast_area(area: Rect, text_width: u16) -> Rect {
    let layout = main_layout(area);
    let width = (text_width + 4).min(area.width);
    let y = layout.bottom.y.saturating_sub(1).max(layout.content.y);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, y, width, 1)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
