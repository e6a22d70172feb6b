use jobflow_core::{
    AnalyticsPanel, AnalyticsView, AppViewModel, AuthFormView, AuthMode, BoardView, BodyView,
    ErrorBanner, HeaderView, JobCardView, ListingPanel, PieSlice, Route, SeriesPoint,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, List, ListItem,
    ListState, Paragraph, Tabs, Wrap,
};
use ratatui::Frame;

use super::constants::{
    hex_color, ACCENT, APPLY_LABEL, ERROR, HELP_ANALYTICS, HELP_AUTH, HELP_BOARD,
    LOCATION_PLACEHOLDER, MUTED, NO_RESULTS_HINT, NO_RESULTS_TITLE, REMOTE, SEARCH_PLACEHOLDER,
};
use super::input::{BoardFocus, UiState};
use super::layout::{analytics_layout, app_layout, board_layout, centered};

/// Width of the longest employment share bar.
const SHARE_BAR_WIDTH: usize = 20;

pub fn draw(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let layout = app_layout(frame.area(), view.error.is_some());

    frame.render_widget(header(&view.header), layout.header);
    draw_nav(frame, layout.nav, view);
    if let Some(error) = &view.error {
        frame.render_widget(banner(error), layout.banner);
    }

    let help = match &view.body {
        BodyView::Board(board) => {
            draw_board(frame, layout.body, board, ui);
            HELP_BOARD
        }
        BodyView::Analytics(panel) => {
            draw_analytics(frame, layout.body, panel);
            HELP_ANALYTICS
        }
        BodyView::Auth(form) => {
            draw_auth(frame, layout.body, form, ui);
            HELP_AUTH
        }
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(MUTED)),
        layout.help,
    );
}

fn header(view: &HeaderView) -> Paragraph<'static> {
    let mut lines = vec![Line::from(Span::styled(
        view.title,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = view.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle,
            Style::default().fg(MUTED),
        )));
    }
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM))
}

fn route_key(route: Route) -> &'static str {
    match route {
        Route::Board => "F1",
        Route::Analytics => "F2",
        Route::Auth(AuthMode::Login) => "F3",
        Route::Auth(AuthMode::Register) => "F4",
    }
}

fn draw_nav(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(area);

    let titles: Vec<String> = view
        .nav
        .iter()
        .map(|tab| format!("{} {}", route_key(tab.route), tab.label))
        .collect();
    let mut tabs = Tabs::new(titles)
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    if let Some(active) = view.nav.iter().position(|tab| tab.active) {
        tabs = tabs.select(active);
    }
    frame.render_widget(tabs, chunks[0]);

    let account: Vec<Span> = [AuthMode::Login, AuthMode::Register]
        .into_iter()
        .map(Route::Auth)
        .map(|route| {
            let style = if route == view.route {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            Span::styled(format!(" {} {} ", route_key(route), route.nav_label()), style)
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(account)).alignment(Alignment::Right),
        chunks[1],
    );
}

fn banner(error: &ErrorBanner) -> Paragraph<'_> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Error: {}", error.message),
            Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("[F5] {}", error.retry_label)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ERROR)),
    )
}

fn focus_block(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(format!(" {title} "))
}

fn text_input<'a>(value: &'a str, placeholder: &'a str, focused: bool) -> Line<'a> {
    if value.is_empty() {
        let hint = Span::styled(placeholder, Style::default().fg(MUTED));
        return if focused {
            Line::from(vec![Span::raw("_"), hint])
        } else {
            Line::from(hint)
        };
    }
    if focused {
        Line::from(vec![Span::raw(value), Span::raw("_")])
    } else {
        Line::from(value)
    }
}

fn select_input(label: String, focused: bool) -> Line<'static> {
    if focused {
        Line::from(format!("\u{2039} {label} \u{203a}"))
    } else {
        Line::from(label)
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &BoardView, ui: &UiState) {
    let layout = board_layout(area);
    let filters = &board.filters;
    let focus = ui.board_focus;

    let inputs = [
        (
            "Search",
            text_input(
                &filters.search_text,
                SEARCH_PLACEHOLDER,
                focus == BoardFocus::Search,
            ),
            focus == BoardFocus::Search,
        ),
        (
            "Location",
            text_input(
                &filters.location_text,
                LOCATION_PLACEHOLDER,
                focus == BoardFocus::Location,
            ),
            focus == BoardFocus::Location,
        ),
        (
            "Type",
            select_input(
                filters.employment_type.to_string(),
                focus == BoardFocus::EmploymentType,
            ),
            focus == BoardFocus::EmploymentType,
        ),
        (
            "Remote",
            select_input(
                filters.remote_preference.to_string(),
                focus == BoardFocus::Remote,
            ),
            focus == BoardFocus::Remote,
        ),
    ];
    for ((title, line, focused), rect) in inputs.into_iter().zip(layout.filters) {
        frame.render_widget(
            Paragraph::new(line).block(focus_block(title, focused)),
            rect,
        );
    }

    let results = layout.list.union(layout.detail);
    match &board.listings {
        ListingPanel::Loading => {
            frame.render_widget(placeholder(vec![Line::from("Loading jobs...")]), results);
        }
        ListingPanel::NoResults => {
            let lines = vec![
                Line::from(Span::styled(
                    NO_RESULTS_TITLE,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(NO_RESULTS_HINT, Style::default().fg(MUTED))),
            ];
            frame.render_widget(placeholder(lines), results);
        }
        ListingPanel::Failed => {
            frame.render_widget(Block::default().borders(Borders::ALL), results);
        }
        ListingPanel::Jobs(cards) => {
            draw_job_list(frame, layout.list, cards, ui, focus == BoardFocus::Results);
            if let Some(card) = cards.get(ui.selected_job) {
                frame.render_widget(job_detail(card), layout.detail);
            }
        }
    }
}

fn placeholder(lines: Vec<Line<'_>>) -> Paragraph<'_> {
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn draw_job_list(
    frame: &mut Frame,
    area: Rect,
    cards: &[JobCardView],
    ui: &UiState,
    focused: bool,
) {
    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    card.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::raw(card.employer.as_str()),
                    Span::styled(" \u{b7} ", Style::default().fg(MUTED)),
                    remote_badge(card),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(focus_block(&format!("Jobs ({})", cards.len()), focused))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(ui.selected_job));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn remote_badge(card: &JobCardView) -> Span<'static> {
    let color = if card.is_remote { REMOTE } else { MUTED };
    Span::styled(card.remote_label, Style::default().fg(color))
}

fn job_detail(card: &JobCardView) -> Paragraph<'_> {
    let mut lines = vec![
        Line::from(Span::styled(
            card.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("at {}", card.employer)),
        Line::from(vec![
            Span::raw(format!("{} \u{b7} {} \u{b7} ", card.location, card.country)),
            remote_badge(card),
        ]),
        Line::from(""),
    ];
    lines.extend(card.description.lines().map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("[Enter] {APPLY_LABEL}"),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", card.apply_link), Style::default().fg(MUTED)),
    ]));

    Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(" Detail "))
        .wrap(Wrap { trim: false })
}

fn draw_analytics(frame: &mut Frame, area: Rect, panel: &AnalyticsPanel) {
    match panel {
        AnalyticsPanel::Loading => {
            frame.render_widget(placeholder(vec![Line::from("Loading analytics...")]), area);
        }
        AnalyticsPanel::NoData => {
            frame.render_widget(placeholder(vec![Line::from("No data available")]), area);
        }
        AnalyticsPanel::Failed => {}
        AnalyticsPanel::Ready(view) => draw_dashboard(frame, area, view),
    }
}

fn draw_dashboard(frame: &mut Frame, area: Rect, view: &AnalyticsView) {
    let layout = analytics_layout(area, view.stats.len());

    for (card, rect) in view.stats.iter().zip(layout.stats) {
        let lines = vec![
            Line::from(Span::styled(card.label, Style::default().fg(MUTED))),
            Line::from(Span::styled(
                card.value.as_str(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.caption, Style::default().fg(MUTED))),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            rect,
        );
    }

    frame.render_widget(hubs_chart(&view.hubs), layout.hubs);
    frame.render_widget(employment_legend(&view.employment), layout.employment);
    if view.daily.is_empty() {
        frame.render_widget(
            placeholder(vec![Line::from("No daily data")]),
            layout.daily,
        );
    } else {
        draw_daily(frame, layout.daily, &view.daily);
    }
}

fn hubs_chart(hubs: &[SeriesPoint]) -> BarChart<'_> {
    let bars: Vec<Bar> = hubs
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.value)
                .label(Line::from(point.label.as_str()))
        })
        .collect();
    BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" Top Tech Hubs "))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(ACCENT))
        .value_style(Style::default().fg(Color::White))
        .data(BarGroup::default().bars(&bars))
}

/// Proportional bars plus a legend, standing in for a pie chart.
fn employment_legend(slices: &[PieSlice]) -> Paragraph<'_> {
    let lines: Vec<Line> = slices
        .iter()
        .map(|slice| {
            Line::from(vec![
                Span::styled(
                    "\u{2588}".repeat(share_width(slice.value, slices)),
                    Style::default().fg(hex_color(slice.color)),
                ),
                Span::raw(format!(" {} ({})", slice.label, slice.value)),
            ])
        })
        .collect();
    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Employment Types "),
    )
}

fn share_width(value: u64, slices: &[PieSlice]) -> usize {
    // Server counts may be near u64::MAX.
    let total = slices
        .iter()
        .fold(0u64, |acc, slice| acc.saturating_add(slice.value));
    if total == 0 {
        return 0;
    }
    let width = (value as f64 / total as f64 * SHARE_BAR_WIDTH as f64).round() as usize;
    width.max(usize::from(value > 0))
}

fn draw_daily(frame: &mut Frame, area: Rect, daily: &[SeriesPoint]) {
    let points: Vec<(f64, f64)> = daily
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value as f64))
        .collect();
    let max_value = daily.iter().map(|point| point.value).max().unwrap_or(0);
    let x_max = (daily.len().saturating_sub(1)).max(1) as f64;
    let y_max = (max_value as f64 * 1.1).max(1.0);

    let first = daily.first().map(|p| p.label.clone()).unwrap_or_default();
    let last = daily.last().map(|p| p.label.clone()).unwrap_or_default();

    let dataset = Dataset::default()
        .name("Jobs")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(ACCENT))
        .data(&points);
    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Jobs Posted by Day "),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(MUTED))
                .bounds([0.0, x_max])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(MUTED))
                .bounds([0.0, y_max])
                .labels(vec![Span::raw("0"), Span::raw(max_value.to_string())]),
        );
    frame.render_widget(chart, area);
}

fn draw_auth(frame: &mut Frame, area: Rect, form: &AuthFormView, ui: &UiState) {
    let mut lines = vec![
        Line::from(Span::styled(form.tagline, Style::default().fg(MUTED))),
        Line::from(""),
    ];
    for (idx, field) in form.fields.iter().enumerate() {
        let focused = idx == ui.auth_focus;
        let shown = if field.masked {
            "*".repeat(field.value.chars().count())
        } else {
            field.value.clone()
        };
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(field.label, label_style)));
        lines.push(Line::from(format!(
            "  {}{}",
            shown,
            if focused { "_" } else { "" }
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[Enter] {}", form.submit_label),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(ERROR),
        )));
    }
    if let Some(notice) = &form.notice {
        lines.push(Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(REMOTE),
        )));
    }

    let height = lines.len() as u16 + 2;
    let title = match form.mode {
        AuthMode::Login => " Sign In ",
        AuthMode::Register => " Create Account ",
    };
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
        centered(area, 50, height),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobflow_core::{update, AppState, Msg};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use serde_json::json;

    fn render(view: &AppViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        terminal
            .draw(|frame| draw(frame, view, &UiState::default()))
            .expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn on(route: Route) -> AppState {
        update(AppState::new(), Msg::Navigate(route)).0
    }

    #[test]
    fn board_shows_header_and_loading() {
        let screen = render(&on(Route::Board).view());
        assert!(screen.contains("Find Your Flow"));
        assert!(screen.contains("Loading jobs..."));
        assert!(screen.contains("F1 Job Board"));
    }

    #[test]
    fn failed_listing_shows_retry_banner() {
        let state = on(Route::Board);
        let ticket = state.listings().in_flight().expect("in flight");
        let (state, _) = update(
            state,
            Msg::FetchResolved {
                ticket,
                result: Err(jobflow_core::FetchFailure::new(
                    jobflow_core::FailureKind::BadResponse(500),
                    "http status 500",
                )),
            },
        );
        let screen = render(&state.view());
        assert!(screen.contains("Error: Failed to fetch jobs"));
        assert!(screen.contains("[F5] Try Again"));
    }

    #[test]
    fn jobs_render_title_and_badge() {
        let state = on(Route::Board);
        let ticket = state.listings().in_flight().expect("in flight");
        let body = json!({"jobs": [{
            "id": "1",
            "title": "Rust Engineer",
            "employer": "Ferris Co",
            "city": "Austin",
            "state": "TX",
            "is_remote": true
        }]});
        let (state, _) = update(
            state,
            Msg::FetchResolved {
                ticket,
                result: Ok(body),
            },
        );
        let screen = render(&state.view());
        assert!(screen.contains("Rust Engineer"));
        assert!(screen.contains("Ferris Co"));
        assert!(screen.contains("Austin, TX"));
        assert!(screen.contains("[Enter] Apply Now"));
    }

    #[test]
    fn register_form_masks_password() {
        let mut state = on(Route::Auth(AuthMode::Register));
        state = update(
            state,
            Msg::AuthFieldChanged {
                field: jobflow_core::AuthField::Password,
                value: "hunter2".into(),
            },
        )
        .0;
        let screen = render(&state.view());
        assert!(screen.contains("Join the Flow"));
        assert!(screen.contains("*******"));
        assert!(!screen.contains("hunter2"));
    }

    #[test]
    fn share_width_is_proportional() {
        let slices = vec![
            PieSlice {
                label: "Full-time".into(),
                value: 3,
                color: "#6366f1",
            },
            PieSlice {
                label: "Contract".into(),
                value: 1,
                color: "#2dd4bf",
            },
        ];
        assert_eq!(share_width(3, &slices), 15);
        assert_eq!(share_width(1, &slices), 5);
        assert_eq!(share_width(0, &[]), 0);
    }

    #[test]
    fn share_width_saturates_on_huge_counts() {
        let slices = vec![
            PieSlice {
                label: "Full-time".into(),
                value: u64::MAX,
                color: "#6366f1",
            },
            PieSlice {
                label: "Contract".into(),
                value: 1,
                color: "#2dd4bf",
            },
        ];
        assert_eq!(share_width(u64::MAX, &slices), SHARE_BAR_WIDTH);
        assert_eq!(share_width(1, &slices), 1);
    }

    #[test]
    fn analytics_with_huge_employment_counts_renders() {
        let state = on(Route::Analytics);
        let ticket = state.analytics().in_flight().expect("in flight");
        let body = json!({"employment_types": [
            {"type": "Full-time", "count": u64::MAX},
            {"type": "Contract", "count": 1}
        ]});
        let (state, _) = update(
            state,
            Msg::FetchResolved {
                ticket,
                result: Ok(body),
            },
        );
        let screen = render(&state.view());
        assert!(screen.contains("Employment Types"));
        assert!(screen.contains("Contract (1)"));
    }
}
