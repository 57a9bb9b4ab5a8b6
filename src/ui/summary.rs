use crate::app::App;
use crate::models::TestResult;
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::menu::{draw_footer, draw_header};
use crate::ui::theme::{palette, title_style};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph},
};

pub fn draw_test_result(f: &mut Frame, app: &App, result: &TestResult) {
    let lang = app.language();
    let p = palette(app.theme());
    let layout = calculate_screen_chunks(f.area());

    draw_header(
        f,
        layout.header_area,
        lang.pick("Wynik testu", "Test result"),
        &p,
    );

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(layout.content_area);
    f.render_widget(block, layout.content_area);

    let verdict_color = if result.passed() { p.correct } else { p.wrong };
    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(vec![
        Span::from(format!("{}: ", lang.pick("Wynik", "Score"))),
        Span::styled(
            format!("{} / {}", result.score, result.total),
            title_style(&p),
        ),
    ]));
    text.push_line(Line::from(format!(
        "{}: {}%",
        lang.pick("Procent", "Percentage"),
        result.percentage()
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        result.comment(lang),
        Style::default()
            .fg(verdict_color)
            .add_modifier(Modifier::BOLD),
    )));

    let text_height = text.height() as u16;
    let summary = Paragraph::new(text)
        .style(Style::default().fg(p.text))
        .alignment(Alignment::Center);
    f.render_widget(summary, inner);

    if inner.height > text_height + 2 {
        let mut gauge_area = inner;
        gauge_area.y += text_height + 1;
        gauge_area.height = 1;
        gauge_area.x += 2;
        gauge_area.width = gauge_area.width.saturating_sub(4);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(verdict_color))
            .percent(result.percentage().min(100) as u16);
        f.render_widget(gauge, gauge_area);
    }

    draw_footer(
        f,
        layout.footer_area,
        &[
            ("Enter/m", lang.pick("Menu", "Menu")),
            ("r", lang.pick("Powtórz test", "Retake test")),
            ("Ctrl+C", lang.pick("Wyjście", "Exit App")),
        ],
        &p,
    );
}
