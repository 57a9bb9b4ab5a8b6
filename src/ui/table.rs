use crate::app::App;
use crate::catalog::{Element, list_elements};
use crate::table::{ElementCategory, category_of, element_at, position_of};
use crate::ui::layout::{calculate_table_chunks, cell_rect, centered_rect};
use crate::ui::menu::{draw_footer, draw_header};
use crate::ui::theme::{Palette, category_color, palette, title_style};
use crate::utils::{center_in, truncate_string};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const DETAIL_WIDTH: u16 = 40;
const DETAIL_HEIGHT: u16 = 11;

pub fn draw_periodic_table(f: &mut Frame, app: &App) {
    let lang = app.language();
    let p = palette(app.theme());
    let layout = calculate_table_chunks(f.area());

    draw_header(
        f,
        layout.header_area,
        lang.pick("Tablica Mendelejewa", "Periodic Table"),
        &p,
    );

    let grid_block = Block::default().borders(Borders::ALL);
    let grid_area = grid_block.inner(layout.grid_area);
    f.render_widget(grid_block, layout.grid_area);

    for element in list_elements() {
        let pos = position_of(element);
        let rect = cell_rect(grid_area, pos);
        if rect.width == 0 || rect.bottom() > grid_area.bottom() {
            continue;
        }
        let mut style = Style::default()
            .fg(p.cell_text)
            .bg(category_color(category_of(element)));
        if pos == app.table.pos {
            style = style
                .bg(p.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        let label = center_in(element.symbol, rect.width as usize);
        f.render_widget(Paragraph::new(label).style(style), rect);
    }

    let info = match element_at(app.table.pos) {
        Some(e) => Line::from(vec![
            Span::styled(format!("{}  ", e.symbol), title_style(&p)),
            Span::from(format!(
                "{}  |  {}: {}  |  {}: {} u",
                e.name(lang),
                lang.pick("Nr", "No."),
                e.number,
                lang.pick("Masa", "Mass"),
                e.formatted_mass()
            )),
        ]),
        None => Line::from(""),
    };
    let info = Paragraph::new(info)
        .style(Style::default().fg(p.text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(info, layout.info_area);

    draw_legend(f, layout.legend_area, app, &p);

    draw_footer(
        f,
        layout.help_area,
        &[
            ("←/→/↑/↓", lang.pick("Ruch", "Move")),
            ("Enter", lang.pick("Szczegóły", "Details")),
            ("Esc", lang.pick("Wstecz", "Back")),
        ],
        &p,
    );

    if app.table.detail_open
        && let Some(element) = element_at(app.table.pos)
    {
        draw_element_detail(f, app, element, &p);
    }
}

fn draw_legend(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let lang = app.language();
    let spans: Vec<Span> = ElementCategory::ALL
        .iter()
        .filter(|c| **c != ElementCategory::Unclassified)
        .flat_map(|c| {
            [
                Span::styled("  ", Style::default().bg(category_color(*c))),
                Span::from(format!(" {}   ", truncate_string(c.name(lang), 20))),
            ]
        })
        .collect();

    let legend = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(p.text))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(lang.pick("Legenda", "Legend")),
        );
    f.render_widget(legend, area);
}

fn draw_element_detail(f: &mut Frame, app: &App, element: &Element, p: &Palette) {
    let lang = app.language();
    let area = centered_rect(DETAIL_WIDTH, DETAIL_HEIGHT, f.area());
    f.render_widget(Clear, area);

    let category = category_of(element);
    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        element.symbol,
        title_style(p).bg(category_color(category)).fg(p.cell_text),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!(
        "{}: {}",
        lang.pick("Nazwa", "Name"),
        element.name(lang)
    )));
    text.push_line(Line::from(format!(
        "{}: {}",
        lang.pick("Liczba atomowa", "Atomic number"),
        element.number
    )));
    text.push_line(Line::from(format!(
        "{}: {} u",
        lang.pick("Masa atomowa", "Atomic mass"),
        element.formatted_mass()
    )));
    text.push_line(Line::from(format!(
        "{}: {}",
        lang.pick("Grupa", "Group"),
        element.group
    )));
    text.push_line(Line::from(format!(
        "{}: {}",
        lang.pick("Kategoria", "Category"),
        category.name(lang)
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        lang.pick("Enter/Esc - zamknij", "Enter/Esc - close"),
        Style::default().fg(p.muted),
    )));

    let popup = Paragraph::new(text)
        .style(Style::default().fg(p.text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(element.name(lang)),
        );
    f.render_widget(popup, area);
}
