use crate::app::{App, Mode};
use crate::catalog::ELEMENT_COUNT;
use crate::models::QuizCategory;
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::theme::{Palette, key_hint, palette, title_style};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub(crate) fn draw_header(f: &mut Frame, area: Rect, title: &str, palette: &Palette) {
    let header = Paragraph::new(title)
        .style(title_style(palette))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, hints: &[(&str, &str)], palette: &Palette) {
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, desc)| key_hint(palette, key, desc))
        .collect();
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

fn selectable_list<'a>(items: &[String], selected: usize, palette: &Palette) -> List<'a> {
    let items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let (prefix, style) = if i == selected {
                (
                    "> ",
                    Style::default()
                        .fg(palette.highlight)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(palette.text))
            };
            ListItem::new(format!("{}{}. {}", prefix, i + 1, label)).style(style)
        })
        .collect();
    List::new(items).block(Block::default().borders(Borders::ALL))
}

pub fn draw_welcome(f: &mut Frame, app: &App) {
    let lang = app.language();
    let p = palette(app.theme());
    let layout = calculate_screen_chunks(f.area());

    draw_header(
        f,
        layout.header_area,
        lang.pick("Quiz Układu Okresowego", "Periodic Table Quiz"),
        &p,
    );

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        lang.pick("Witaj!", "Welcome!"),
        title_style(&p),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(lang.pick(
        "Przeglądaj tablicę Mendelejewa, ćwicz w trybie quizu i sprawdź się w teście.",
        "Browse the periodic table, practice with quizzes and check yourself in a test.",
    )));
    text.push_line(Line::from(format!(
        "{}: {}",
        lang.pick("Pierwiastki w katalogu", "Elements in the catalog"),
        ELEMENT_COUNT
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!(
        "{}: {}   {}: {}",
        lang.pick("Język", "Language"),
        lang.code().to_uppercase(),
        lang.pick("Motyw", "Theme"),
        app.theme()
    )));

    let body = Paragraph::new(text)
        .style(Style::default().fg(p.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.content_area);

    draw_footer(
        f,
        layout.footer_area,
        &[
            ("Enter", lang.pick("Start", "Start")),
            ("l", lang.pick("Język", "Language")),
            ("t", lang.pick("Motyw", "Theme")),
            ("Esc", lang.pick("Wyjście", "Quit")),
        ],
        &p,
    );
}

pub fn draw_modes(f: &mut Frame, app: &App) {
    let lang = app.language();
    let p = palette(app.theme());
    let layout = calculate_screen_chunks(f.area());

    draw_header(f, layout.header_area, lang.pick("Wybierz tryb", "Choose a mode"), &p);

    let labels: Vec<String> = Mode::ALL.iter().map(|m| m.label(lang).to_string()).collect();
    f.render_widget(
        selectable_list(&labels, app.menu_index, &p),
        layout.content_area,
    );

    draw_footer(
        f,
        layout.footer_area,
        &[
            ("↑/↓", lang.pick("Wybór", "Select")),
            ("Enter", lang.pick("Otwórz", "Open")),
            ("l", lang.pick("Język", "Language")),
            ("t", lang.pick("Motyw", "Theme")),
            ("Esc", lang.pick("Wstecz", "Back")),
        ],
        &p,
    );
}

pub fn draw_quiz_menu(f: &mut Frame, app: &App) {
    let lang = app.language();
    let p = palette(app.theme());
    let layout = calculate_screen_chunks(f.area());

    draw_header(
        f,
        layout.header_area,
        lang.pick("Quiz - wybierz kategorię", "Quiz - choose a category"),
        &p,
    );

    let labels: Vec<String> = QuizCategory::ALL_CATEGORIES
        .iter()
        .map(|c| c.label(lang).to_string())
        .collect();
    f.render_widget(
        selectable_list(&labels, app.menu_index, &p),
        layout.content_area,
    );

    draw_footer(
        f,
        layout.footer_area,
        &[
            ("↑/↓", lang.pick("Wybór", "Select")),
            ("Enter/1-4", lang.pick("Start", "Start")),
            ("Esc", lang.pick("Wstecz", "Back")),
        ],
        &p,
    );
}
