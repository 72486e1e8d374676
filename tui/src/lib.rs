//! TUI rendering for Sentience using ratatui.

mod app;
mod input;
mod theme;

pub use app::{App, PAGE_SCROLL, Screen};
pub use input::{handle_events, handle_key};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
};

use sentience_engine::positions::{self, VerdictFilter};
use sentience_engine::{End, Node, PathStep, Question, StepOutcome, Verdict};
use sentience_types::truncate_to_width;

const MISSING_NODE: &str = "Error: missing node.";
const EMPTY_PATH: &str = "No path history recorded.";

const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette, &glyphs);
    match app.screen() {
        Screen::Quiz => draw_quiz(frame, app, chunks[1], &palette, &glyphs),
        Screen::Positions => draw_positions(frame, app, chunks[1], &palette),
    }
    draw_notice(frame, app, chunks[2], &palette);
    draw_key_hints(frame, app, chunks[3], &palette, &glyphs);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let context = match app.screen() {
        Screen::Positions => "All Consciousness Positions".to_string(),
        Screen::Quiz => match app.session().subject() {
            Some(subject) => format!("Assessing {}", subject.term),
            None => "A consciousness quiz".to_string(),
        },
    };
    let title = "Sentience";
    let fixed = title.len() + glyphs.separator.len() + 2;
    let context = truncate_to_width(&context, usize::from(area.width).saturating_sub(fixed));

    let line = Line::from(vec![
        Span::styled(title, styles::title(palette)),
        Span::styled(
            format!(" {} ", glyphs.separator),
            Style::default().fg(palette.text_muted),
        ),
        Span::styled(context, Style::default().fg(palette.text_secondary)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_quiz(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (title, lines) = match app.session().current_node() {
        Ok(Node::Question(question)) => (
            format!(" Question {} ", app.session().history().len() + 1),
            question_lines(app, question, palette, glyphs),
        ),
        Ok(Node::End(end)) => (" Result ".to_string(), end_lines(app, end, palette, glyphs)),
        Err(err) => {
            tracing::warn!(error = %err, "Cannot render current node");
            (
                " Error ".to_string(),
                vec![Line::from(Span::styled(
                    MISSING_NODE,
                    Style::default()
                        .fg(palette.error)
                        .add_modifier(Modifier::BOLD),
                ))],
            )
        }
    };
    draw_scrollable(frame, app, area, title, lines, palette);
}

fn question_lines(
    app: &App,
    question: &Question,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let session = app.session();
    let mut lines = Vec::new();

    push_text(
        &mut lines,
        &session.render(&question.text),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    );

    if app.show_detail()
        && let Some(detail) = question.detail.as_deref()
    {
        lines.push(Line::default());
        push_text(&mut lines, &session.render(detail), styles::detail(palette));
    }

    lines.push(Line::default());
    for (index, option) in question.options.iter().enumerate() {
        let selected = index == app.cursor();
        let marker = if selected { glyphs.selected } else { " " };
        let label_style = if selected {
            styles::selected_option(palette)
        } else {
            Style::default().fg(palette.text_primary)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
            Span::styled(
                format!("{}. ", index + 1),
                Style::default().fg(palette.text_muted),
            ),
            Span::styled(
                format!("{} ", glyphs.tone(option.tone)),
                Style::default().fg(palette.tone(option.tone)),
            ),
            Span::styled(session.render(&option.label).into_owned(), label_style),
        ]));
    }

    lines
}

fn end_lines(app: &App, end: &End, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let session = app.session();
    let mut lines = vec![Line::from(vec![
        verdict_badge(end.verdict, end.verdict.badge_label(), palette),
        Span::raw(" "),
        Span::styled(
            session.render(&end.title).into_owned(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    lines.push(Line::default());
    push_text(
        &mut lines,
        &session.render(&end.desc),
        Style::default().fg(palette.text_secondary),
    );

    if app.show_detail()
        && let Some(detail) = end.detail.as_deref()
    {
        lines.push(Line::default());
        push_text(&mut lines, &session.render(detail), styles::detail(palette));
    }

    if !end.references.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Thinkers & Sources:",
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )));
        for reference in &end.references {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", glyphs.bullet),
                    Style::default().fg(palette.text_muted),
                ),
                Span::styled(
                    reference.thinker.clone(),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {} ", glyphs.dash),
                    Style::default().fg(palette.text_muted),
                ),
                Span::styled(
                    reference.work.clone(),
                    Style::default()
                        .fg(palette.text_secondary)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]));
        }
    }

    if app.show_path() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Your path", styles::title(palette))));
        let steps: Vec<PathStep> = session.path_so_far().collect();
        if steps.is_empty() {
            lines.push(Line::from(Span::styled(
                EMPTY_PATH,
                Style::default().fg(palette.text_muted),
            )));
        }
        for step in steps {
            lines.extend(path_step_lines(&step, palette, glyphs));
        }
    }

    lines
}

fn path_step_lines(step: &PathStep, palette: &Palette, glyphs: &Glyphs) -> [Line<'static>; 2] {
    let (marker, color) = match step.outcome {
        StepOutcome::Answer(tone) => (glyphs.tone(tone), palette.tone(tone)),
        StepOutcome::Result(verdict) => (glyphs.result, palette.verdict(verdict)),
    };
    [
        Line::from(vec![
            Span::styled(
                format!("{:>2}. ", step.number),
                Style::default().fg(palette.text_muted),
            ),
            Span::styled(step.prompt.clone(), Style::default().fg(palette.text_primary)),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{marker} "), Style::default().fg(color)),
            Span::styled(
                step.answer.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
    ]
}

fn draw_positions(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let graph = app.session().graph();
    let counts = positions::counts(graph);
    let active = app.filter();

    let mut filters = vec![Span::styled(
        "Filter: ",
        Style::default().fg(palette.text_muted),
    )];
    let mut filter = VerdictFilter::All;
    loop {
        let style = if filter == active {
            styles::key_highlight(palette)
        } else {
            styles::key_hint(palette)
        };
        filters.push(Span::styled(
            format!("{} ({})", filter.label(), counts.for_filter(filter)),
            style,
        ));
        filter = filter.next();
        if filter == VerdictFilter::All {
            break;
        }
        filters.push(Span::raw("  "));
    }

    let mut lines = vec![Line::from(filters), Line::default()];
    let mut shown = 0usize;
    for end in positions::filtered(graph, active) {
        shown += 1;
        lines.extend(position_lines(app, end, palette));
    }
    if shown == 0 {
        lines.push(Line::from(Span::styled(
            "No positions match this filter.",
            Style::default().fg(palette.text_muted),
        )));
    }

    let title = format!(" {} ({}) ", active.label(), counts.for_filter(active));
    draw_scrollable(frame, app, area, title, lines, palette);
}

fn position_lines(app: &App, end: &End, palette: &Palette) -> Vec<Line<'static>> {
    let session = app.session();
    let mut lines = vec![Line::from(vec![
        verdict_badge(end.verdict, end.verdict.display_name(), palette),
        Span::raw(" "),
        Span::styled(
            session.render(&end.title).into_owned(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    push_text(
        &mut lines,
        &session.render(&end.desc),
        Style::default().fg(palette.text_secondary),
    );
    if !end.references.is_empty() {
        let thinkers: Vec<&str> = end
            .references
            .iter()
            .map(|reference| reference.thinker.as_str())
            .collect();
        lines.push(Line::from(vec![
            Span::styled("Key Thinkers: ", Style::default().fg(palette.text_muted)),
            Span::styled(thinkers.join(", "), Style::default().fg(palette.accent)),
        ]));
    }
    lines.push(Line::default());
    lines
}

fn verdict_badge(verdict: Verdict, label: &str, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!(" {label} "),
        styles::badge(palette.verdict(verdict), palette),
    )
}

/// Render `lines` in a bordered card and record how far it can scroll.
fn draw_scrollable(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    title: String,
    lines: Vec<Line<'static>>,
    palette: &Palette,
) {
    let options = app.ui_options();
    let glyphs = glyphs(options);
    let block = Block::default().borders(Borders::ALL);
    let block = if options.ascii_only {
        block.border_set(ASCII_BORDER)
    } else {
        block.border_type(BorderType::Rounded)
    };
    let block = block
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(title, styles::title(palette)))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let total = paragraph.line_count(inner.width);
    let overflow = total.saturating_sub(usize::from(inner.height));
    app.set_max_scroll(u16::try_from(overflow).unwrap_or(u16::MAX));

    frame.render_widget(block, area);
    frame.render_widget(paragraph.scroll((app.scroll(), 0)), inner);

    if overflow > 0 {
        let mut state = ScrollbarState::new(overflow).position(usize::from(app.scroll()));
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .track_symbol(Some(glyphs.track))
                .thumb_symbol(glyphs.thumb)
                .style(Style::default().fg(palette.text_muted)),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut state,
        );
    }
}

fn draw_notice(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(notice) = app.notice() else {
        return;
    };
    let text = truncate_to_width(notice, usize::from(area.width));
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(palette.error))),
        area,
    );
}

fn draw_key_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let session = app.session();
    let move_keys = if app.ui_options().ascii_only {
        "j/k"
    } else {
        "↑↓"
    };

    let mut hints: Vec<(&str, &str)> = Vec::new();
    match app.screen() {
        Screen::Positions => {
            hints.extend([
                ("f", "filter"),
                (move_keys, "scroll"),
                ("esc", "back to quiz"),
                ("r", "restart"),
            ]);
        }
        Screen::Quiz => match session.current_node() {
            Ok(Node::Question(_)) => {
                hints.extend([(move_keys, "move"), ("enter", "choose")]);
                if session.can_go_back() {
                    hints.push(("b", "back"));
                }
                hints.extend([("d", "detail"), ("a", "positions"), ("r", "restart")]);
            }
            Ok(Node::End(_)) => {
                if session.can_go_back() {
                    hints.push(("b", "back"));
                }
                let path = if app.show_path() {
                    "hide path"
                } else {
                    "view full path"
                };
                hints.extend([("p", path), ("d", "detail"), ("a", "positions"), ("r", "restart")]);
            }
            Err(_) => {
                if session.can_go_back() {
                    hints.push(("b", "back"));
                }
                hints.push(("r", "restart"));
            }
        },
    }
    hints.push(("q", "quit"));

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (index, (key, label)) in hints.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.separator),
                styles::key_hint(palette),
            ));
        }
        spans.push(Span::styled(key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {label}"), styles::key_hint(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn push_text(lines: &mut Vec<Line<'static>>, text: &str, style: Style) {
    for raw in text.lines() {
        lines.push(Line::from(Span::styled(raw.to_string(), style)));
    }
}
