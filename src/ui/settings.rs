use crate::app::{App, SettingsField};
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::menu::{draw_footer, draw_header};
use crate::ui::theme::palette;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

pub fn draw_test_settings(f: &mut Frame, app: &App) {
    let lang = app.language();
    let p = palette(app.theme());
    let layout = calculate_screen_chunks(f.area());
    let form = &app.test_form;

    draw_header(
        f,
        layout.header_area,
        lang.pick("Ustawienia testu", "Test settings"),
        &p,
    );

    let row = |field: SettingsField, label: &'static str, value: String| {
        let focused = form.focused == field;
        let style = if focused {
            Style::default()
                .fg(p.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.text)
        };
        Line::from(vec![
            Span::styled(if focused { "> " } else { "  " }, style),
            Span::styled(format!("{:<22}", label), style),
            Span::styled(format!("< {} >", value), style),
        ])
    };

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(row(
        SettingsField::Category,
        lang.pick("Kategoria:", "Category:"),
        form.category().short_label(lang).to_string(),
    ));
    text.push_line(Line::from(""));
    text.push_line(row(
        SettingsField::Count,
        lang.pick("Liczba pytań:", "Number of questions:"),
        form.count().to_string(),
    ));
    if let Some(error) = &app.error_message {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(p.wrong),
        )));
    }

    let body = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.content_area);

    draw_footer(
        f,
        layout.footer_area,
        &[
            ("↑/↓", lang.pick("Pole", "Field")),
            ("←/→", lang.pick("Zmień", "Change")),
            ("Enter", lang.pick("Rozpocznij", "Start")),
            ("Esc", lang.pick("Wstecz", "Back")),
        ],
        &p,
    );
}
