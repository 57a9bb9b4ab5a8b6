use crate::app::App;
use crate::practice::PracticeRound;
use crate::test_session::TestSession;
use crate::ui::layout::calculate_quiz_chunks;
use crate::ui::menu::{draw_footer, draw_header};
use crate::ui::theme::{key_hint, palette};
use crate::utils::cursor_column;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn draw_practice(f: &mut Frame, app: &App, round: &PracticeRound) {
    let lang = app.language();
    let p = palette(app.theme());
    let layout = calculate_quiz_chunks(f.area());

    let progress = format!(
        "{} - {}  |  {}: {} / {}",
        lang.pick("Quiz", "Quiz"),
        round.category().label(lang),
        lang.pick("Wynik", "Score"),
        round.score(),
        round.answered()
    );
    draw_header(f, layout.header_area, &progress, &p);

    let question = round.question();
    let question_widget = Paragraph::new(question.text.as_str())
        .style(Style::default().fg(p.text).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(lang.pick("Pytanie", "Question")),
        );
    f.render_widget(question_widget, layout.question_area);

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = match round.selected() {
                Some(_) if i == question.correct_index => Style::default()
                    .fg(p.correct)
                    .add_modifier(Modifier::BOLD),
                Some(selected) if i == selected => Style::default()
                    .fg(p.wrong)
                    .add_modifier(Modifier::BOLD),
                Some(_) => Style::default().fg(p.muted),
                None => Style::default().fg(p.text),
            };
            ListItem::new(format!("  {}. {}", i + 1, option)).style(style)
        })
        .collect();

    let title = match round.selected() {
        Some(i) if i == question.correct_index => lang.pick("Dobrze!", "Correct!"),
        Some(_) => lang.pick("Źle!", "Wrong!"),
        None => lang.pick("Odpowiedzi", "Options"),
    };
    let options = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(options, layout.answer_area);

    let mut hints = vec![("1-4", lang.pick("Wybierz", "Choose"))];
    if round.selected().is_some() {
        hints.push(("Enter/n", lang.pick("Następne", "Next")));
    }
    hints.push(("Esc", lang.pick("Kategorie", "Categories")));
    hints.push(("Ctrl+C", lang.pick("Wyjście", "Exit App")));
    draw_footer(f, layout.help_area, &hints, &p);
}

pub fn draw_test(f: &mut Frame, app: &App, test: &TestSession) {
    let lang = app.language();
    let p = palette(app.theme());
    let layout = calculate_quiz_chunks(f.area());

    let (current, total) = test.progress();
    let progress = format!(
        "{} {} / {} - {}",
        lang.pick("Pytanie", "Question"),
        current,
        total,
        test.category().label(lang)
    );
    draw_header(f, layout.header_area, &progress, &p);

    let prompt = test
        .current_question()
        .map(|q| q.text.as_str())
        .unwrap_or_default();
    let question = Paragraph::new(prompt)
        .style(Style::default().fg(p.text).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(lang.pick("Pytanie", "Question")),
        );
    f.render_widget(question, layout.question_area);

    let answer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(layout.answer_area);

    let input = if app.input_buffer.is_empty() {
        Span::styled(
            lang.pick("[Wpisz odpowiedź...]", "[Type your answer here...]"),
            Style::default().fg(p.muted),
        )
    } else {
        Span::styled(app.input_buffer.as_str(), Style::default().fg(p.text))
    };
    let input_widget = Paragraph::new(Line::from(input)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(lang.pick("Twoja odpowiedź", "Your Answer")),
    );
    f.render_widget(input_widget, answer_chunks[0]);

    let cursor_x = answer_chunks[0].x
        + 1
        + cursor_column(&app.input_buffer, app.cursor_position) as u16;
    f.set_cursor_position((cursor_x, answer_chunks[0].y + 1));

    let mut feedback = Text::default();
    if let Some(last) = &app.last_feedback {
        if last.correct {
            feedback.push_line(Line::from(Span::styled(
                lang.pick("Poprzednia odpowiedź: dobrze", "Previous answer: correct"),
                Style::default().fg(p.correct).add_modifier(Modifier::BOLD),
            )));
        } else {
            feedback.push_line(Line::from(Span::styled(
                format!(
                    "{} {}",
                    lang.pick(
                        "Poprzednia odpowiedź: źle. Poprawna:",
                        "Previous answer: wrong. Correct:"
                    ),
                    last.expected
                ),
                Style::default().fg(p.wrong).add_modifier(Modifier::BOLD),
            )));
        }
    }
    if let Some(error) = &app.error_message {
        feedback.push_line(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(p.wrong),
        )));
    }
    feedback.push_line(Line::from(format!(
        "{}: {}",
        lang.pick("Punkty", "Points"),
        test.score()
    )));
    let feedback_widget = Paragraph::new(feedback)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback_widget, answer_chunks[1]);

    let submit_label = if test.is_last_question() {
        lang.pick("Zakończ", "Finish")
    } else {
        lang.pick("Zatwierdź", "Submit")
    };
    draw_footer(
        f,
        layout.help_area,
        &[
            ("Enter", submit_label),
            ("Esc", lang.pick("Przerwij", "Abort")),
            ("Ctrl+C", lang.pick("Wyjście", "Exit App")),
        ],
        &p,
    );
}

pub fn draw_quit_confirmation(f: &mut Frame, app: &App) {
    let lang = app.language();
    let p = palette(app.theme());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(lang.pick("Przerwać test?", "Abort the test?"))
        .style(
            Style::default()
                .fg(p.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new(lang.pick(
        "Postęp testu zostanie utracony.",
        "Progress in this test will be lost.",
    ))
    .style(Style::default().fg(p.text))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let mut spans = Vec::new();
    spans.extend(key_hint(&p, "y", lang.pick("Tak (wróć do menu)", "Yes (return to menu)")));
    spans.extend(key_hint(&p, "n", lang.pick("Nie (kontynuuj)", "No (continue test)")));
    spans.extend(key_hint(&p, "Ctrl+C", lang.pick("Wyjście", "Exit App")));
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
