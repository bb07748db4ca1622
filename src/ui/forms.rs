//! Form and referral modal rendering

use std::ops::Range;

use ratatui::{prelude::*, widgets::*};

use crate::constants::REFERRAL_LINK_SHORT;
use crate::forms::{Control, FieldKind, FieldSpec, FormState};
use crate::models::FormKind;
use crate::ui::components::{button, outline_button, palette};

const CURSOR: char = '▏';

/// Draw a form; `editing` is true while its focused field takes text
pub fn draw_form(f: &mut Frame, area: Rect, form: &FormState, auth_ready: bool, editing: bool) {
    let (lines, focus) = form_lines(form, auth_ready, editing);
    let (rows, focus) = wrap_rows(lines, focus, area.width as usize);

    let scroll = focus_scroll(focus, area.height as usize) as u16;
    f.render_widget(Paragraph::new(rows).scroll((scroll, 0)), area);
}

/// First row to show so the focused control fits, or at least starts, on screen
fn focus_scroll(focus: Range<usize>, height: usize) -> usize {
    if focus.end > height {
        focus.start.min(focus.end - height)
    } else {
        0
    }
}

/// Wrap every line to `width` columns. Maps the focused line range to rows.
fn wrap_rows(lines: Vec<Line<'static>>, focus: Range<usize>, width: usize) -> (Vec<Line<'static>>, Range<usize>) {
    let mut rows = Vec::with_capacity(lines.len());
    let (mut start, mut end) = (0, 0);
    for (index, line) in lines.into_iter().enumerate() {
        if index == focus.start {
            start = rows.len();
        }
        rows.extend(hard_wrap(line, width));
        if index + 1 == focus.end {
            end = rows.len();
        }
    }
    (rows, start..end.max(start))
}

/// Split a line wider than `width` at character boundaries, keeping span styles
fn hard_wrap(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 || line.width() <= width {
        return vec![line];
    }
    let mut rows = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for span in line.spans {
        let mut chunk = String::new();
        for c in span.content.chars() {
            if used == width {
                if !chunk.is_empty() {
                    current.push(Span::styled(std::mem::take(&mut chunk), span.style));
                }
                rows.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            }
            chunk.push(c);
            used += 1;
        }
        if !chunk.is_empty() {
            current.push(Span::styled(chunk, span.style));
        }
    }
    if !current.is_empty() {
        rows.push(Line::from(current));
    }
    rows
}

/// Lines of a form and the line range of the focused control
pub fn form_lines(form: &FormState, auth_ready: bool, editing: bool) -> (Vec<Line<'static>>, Range<usize>) {
    let mut lines = vec![
        Line::from(Span::styled(form.kind.title(), Style::default().bold())),
        Line::default(),
    ];
    let mut focus = 0..0;

    for (index, control) in form.kind.controls().into_iter().enumerate() {
        let focused = index == form.focus;
        let start = lines.len();

        if control == Control::Submit && form.kind == FormKind::Issue {
            lines.push(Line::from(Span::styled(
                "  [kuva] Liitä kuva/video (demo)",
                Style::default().fg(palette::MUTED),
            )));
            lines.push(Line::default());
        }

        match control {
            Control::Field(spec) => {
                field_lines(&mut lines, form, spec, focused, focused && editing);
            }
            Control::AuthToggle => auth_lines(&mut lines, focused, auth_ready),
            Control::Submit => submit_lines(&mut lines, form, focused, auth_ready),
        }
        if focused {
            focus = start..lines.len();
        }
        lines.push(Line::default());
    }

    (lines, focus)
}

fn marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("› ", Style::default().fg(palette::ACCENT).bold())
    } else {
        Span::raw("  ")
    }
}

fn field_lines(lines: &mut Vec<Line<'static>>, form: &FormState, spec: FieldSpec, focused: bool, editing: bool) {
    let label_style = if focused {
        Style::default().bold()
    } else {
        Style::default()
    };
    lines.push(Line::from(vec![marker(focused), Span::styled(spec.label, label_style)]));

    let value_style = if editing {
        Style::default().fg(Color::Yellow)
    } else if focused {
        Style::default().fg(palette::ACCENT)
    } else {
        Style::default()
    };
    let value = form.draft.get(spec.name);

    match spec.kind {
        FieldKind::Select(_) => {
            lines.push(Line::from(Span::styled(format!("    ‹ {} ›", value), value_style)));
        }
        FieldKind::Text | FieldKind::Multiline => {
            if value.is_empty() && !editing {
                lines.push(Line::from(Span::styled(
                    format!("    {}", spec.placeholder),
                    Style::default().fg(palette::MUTED).italic(),
                )));
                return;
            }
            let mut text = value.to_string();
            if editing {
                let at = form.cursor.min(text.len());
                if text.is_char_boundary(at) {
                    text.insert(at, CURSOR);
                }
            }
            for part in text.split('\n') {
                lines.push(Line::from(Span::styled(format!("    {}", part), value_style)));
            }
        }
    }
}

fn auth_lines(lines: &mut Vec<Line<'static>>, focused: bool, auth_ready: bool) {
    lines.push(Line::from(vec![
        marker(focused),
        Span::styled("Vahva tunnistautuminen", Style::default().bold()),
    ]));
    lines.push(Line::from(Span::styled(
        "    Suomi.fi / pankkitunnus – DEMO",
        Style::default().fg(palette::MUTED),
    )));
    let toggle = if auth_ready {
        button("Tunnistettu", None, palette::SUCCESS)
    } else {
        button("Tunnistaudu", None, palette::DISABLED)
    };
    lines.push(Line::from(vec![Span::raw("    "), toggle]));
}

fn submit_lines(lines: &mut Vec<Line<'static>>, form: &FormState, focused: bool, auth_ready: bool) {
    let enabled = form.submit_enabled(auth_ready);
    let bg = if !enabled {
        palette::DISABLED
    } else if form.kind == FormKind::Update {
        palette::PRIMARY
    } else {
        palette::TEXT
    };
    let key = if enabled { Some('s') } else { None };
    lines.push(Line::from(vec![marker(focused), button(form.submit_label(), key, bg)]));

    if !enabled {
        lines.push(Line::from(Span::styled(
            "    Ota käyttöön vahva tunnistautuminen jatkaaksesi.",
            Style::default().fg(palette::MUTED),
        )));
    }
}

/// Contents of the referral modal
pub fn draw_referral(f: &mut Frame, area: Rect) {
    let muted = Style::default().fg(palette::MUTED);
    let lines = vec![
        Line::from("Suosittele palvelu tuttavallesi. Kun heidän sopimuksensa alkaa, saat"),
        Line::from(vec![
            Span::styled("1 kuukauden veloituksetta", Style::default().bold()),
            Span::raw(" omaan sopimukseesi."),
        ]),
        Line::default(),
        Line::from(vec![
            Span::raw("Suosittelulinkki  "),
            Span::styled(REFERRAL_LINK_SHORT, Style::default().fg(palette::ACCENT)),
            Span::raw("  "),
            button("Kopioi", Some('c'), palette::TEXT),
        ]),
        Line::default(),
        Line::from(vec![
            outline_button("Jaa WhatsApp", None),
            Span::raw("  "),
            outline_button("Jaa Sähköposti", None),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Kampanjaehdot (lyhyesti)",
            Style::default().fg(palette::ACCENT).bold(),
        )),
        Line::from(Span::styled(
            "• Hyvitys 1 kk veloituksetta, kun suosittelun kautta tehty sopimus alkaa.",
            muted,
        )),
        Line::from(Span::styled("• Hyvitys kohdistetaan seuraavaan laskutuskauteen.", muted)),
        Line::from(Span::styled("• Ei voi yhdistää muihin alennuksiin. (DEMO)", muted)),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
