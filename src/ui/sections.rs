//! Home and profile sections

use ratatui::{prelude::*, widgets::*};

use crate::messages::RenderState;
use crate::models::AlertKind;
use crate::ui::components::{alert, button, card, outline_button, palette, vehicle_picture};

pub fn draw_home(f: &mut Frame, area: Rect, state: &RenderState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Vehicle
            Constraint::Length(6), // Contract
            Constraint::Length(4), // Service alert
            Constraint::Length(5), // Referral
            Constraint::Length(7), // New customer
            Constraint::Min(0),
        ])
        .split(area);

    draw_vehicle_card(f, chunks[0], state);
    draw_contract_card(f, chunks[1], state);
    f.render_widget(
        alert(
            AlertKind::Warning,
            "Huolto lähestyy",
            "Seuraava huolto 2 000 km kuluttua. Varaa aika kumppaniverkostosta.",
        ),
        chunks[2],
    );
    draw_referral_card(f, chunks[3]);
    draw_new_customer_card(f, chunks[4]);
}

fn draw_vehicle_card(f: &mut Frame, area: Rect, state: &RenderState) {
    let block = card("Autoni");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(inner);

    let text = vec![
        Line::from(Span::styled(state.contract.vehicle.clone(), Style::default().bold())),
        Line::default(),
        Line::from(Span::styled(
            "✓ OK – ei ilmoitettuja vikoja",
            Style::default().fg(palette::SUCCESS),
        )),
    ];
    f.render_widget(Paragraph::new(text), columns[0]);
    f.render_widget(vehicle_picture(), columns[1]);
}

fn draw_contract_card(f: &mut Frame, area: Rect, state: &RenderState) {
    let block = card("Sopimus");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = vec![
        Line::from(vec![
            Span::styled(state.contract.number.clone(), Style::default().bold()),
            Span::raw("  "),
            Span::styled(
                format!("Jäljellä {} pv", state.days_left),
                Style::default().fg(palette::ACCENT),
            ),
        ]),
        Line::from(Span::styled(state.contract.terms_line(), Style::default().fg(palette::MUTED))),
        Line::default(),
        Line::from(vec![
            button("Päivitä sopimus", Some('u'), palette::PRIMARY),
            Span::raw("  "),
            outline_button("Ilmoita viasta", Some('i')),
        ]),
    ];
    f.render_widget(Paragraph::new(text), inner);
}

fn draw_referral_card(f: &mut Frame, area: Rect) {
    let block = card("Suosittele kaverille");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = vec![
        Line::from("Onnistuneesta suosittelusta 1 kk veloituksetta"),
        Line::default(),
        Line::from(button("Jaa linkki", Some('r'), palette::ACCENT)),
    ];
    f.render_widget(Paragraph::new(text), inner);
}

fn draw_new_customer_card(f: &mut Frame, area: Rect) {
    let block = card("Uusi asiakas");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = vec![
        Line::from(Span::styled(
            "Täytä leasing‑hakemus sovelluksessa",
            Style::default().bold(),
        )),
        Line::from(Span::styled(
            "Vahva tunnistautuminen (Suomi.fi / BankID‑demo), nopea päätös.",
            Style::default().fg(palette::MUTED),
        )),
        Line::default(),
        Line::from(vec![
            button("Aloita hakemus", Some('a'), palette::TEXT),
            Span::raw("  "),
            outline_button("Katso ehdot", None),
        ]),
    ];
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
}

pub fn draw_profile(f: &mut Frame, area: Rect, state: &RenderState) {
    let block = card("Asiakasprofiili");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let identified = if state.auth_ready {
        Span::styled("Tunnistettu", Style::default().fg(palette::SUCCESS))
    } else {
        Span::styled("Ei tunnistettu", Style::default().fg(palette::MUTED))
    };

    let row = |label: &'static str, value: Span<'static>| {
        Line::from(vec![
            Span::styled(format!("{:<18}", label), Style::default().fg(palette::MUTED)),
            value,
        ])
    };

    let text = vec![
        row("Sopimusnumero", Span::raw(state.contract.number.clone())),
        row("Auto", Span::raw(state.contract.vehicle.clone())),
        row(
            "Päättyy",
            Span::raw(state.contract.ends_on.format("%d.%m.%Y").to_string()),
        ),
        row("Tunnistautuminen", identified),
    ];
    f.render_widget(Paragraph::new(text), inner);
}
