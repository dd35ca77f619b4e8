//! Result screen rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::form::Verdict;

/// Render the verdict card shown after a completed submission
pub fn render(frame: &mut Frame, area: Rect, verdict: Verdict) {
    let card_width = 56u16.min(area.width.saturating_sub(4));
    let card_height = 14u16.min(area.height.saturating_sub(2));

    let card_x = (area.width.saturating_sub(card_width)) / 2;
    let card_y = (area.height.saturating_sub(card_height)) / 2;

    let card_area = Rect::new(card_x, card_y, card_width, card_height);

    frame.render_widget(Clear, card_area);

    let accent = match verdict {
        Verdict::LowRisk => Color::Green,
        Verdict::ElevatedRisk => Color::Yellow,
    };

    let block = Block::default()
        .title(" Assessment Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let (mark, headline, summary) = match verdict {
        Verdict::LowRisk => (
            "✓",
            "Low Credit Risk",
            "Based on the information provided, the applicant shows a \
             favorable credit profile with good repayment probability.",
        ),
        Verdict::ElevatedRisk => (
            "✗",
            "High Credit Risk",
            "The application indicates elevated risk factors. Additional \
             verification or adjusted terms may be required.",
        ),
    };

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            mark,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            headline,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(summary),
        Line::from(""),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(content, inner);

    let footer_area = Rect::new(
        card_area.x + 1,
        card_area.y + card_area.height.saturating_sub(2),
        card_area.width.saturating_sub(2),
        1,
    );
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::styled(" New application  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[r]", Style::default().fg(Color::Yellow)),
        Span::styled(" Review details  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[q]", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}
