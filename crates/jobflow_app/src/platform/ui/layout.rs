use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub nav: Rect,
    /// Zero height when there is no error to show.
    pub banner: Rect,
    pub body: Rect,
    pub help: Rect,
}

pub fn app_layout(area: Rect, with_banner: bool) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(if with_banner { 4 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    AppLayout {
        header: chunks[0],
        nav: chunks[1],
        banner: chunks[2],
        body: chunks[3],
        help: chunks[4],
    }
}

pub struct BoardLayout {
    /// Search, location, type and remote, left to right.
    pub filters: [Rect; 4],
    pub list: Rect,
    pub detail: Rect,
}

pub fn board_layout(body: Rect) -> BoardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body);
    let filters = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(rows[0]);
    let results = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    BoardLayout {
        filters: [filters[0], filters[1], filters[2], filters[3]],
        list: results[0],
        detail: results[1],
    }
}

pub struct AnalyticsLayout {
    pub stats: Vec<Rect>,
    pub hubs: Rect,
    pub employment: Rect,
    pub daily: Rect,
}

pub fn analytics_layout(body: Rect, stat_count: usize) -> AnalyticsLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Percentage(50),
            Constraint::Min(6),
        ])
        .split(body);
    let count = stat_count.max(1) as u32;
    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(rows[0]);
    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);
    AnalyticsLayout {
        stats: stats.iter().copied().take(stat_count).collect(),
        hubs: charts[0],
        employment: charts[1],
        daily: rows[2],
    }
}

/// A `width` x `height` box centered in `area`, clipped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_collapses_without_error() {
        let layout = app_layout(Rect::new(0, 0, 80, 30), false);
        assert_eq!(layout.banner.height, 0);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.help.y, 29);
        assert_eq!(layout.body.height, 30 - 3 - 1 - 1);
    }

    #[test]
    fn banner_takes_rows_when_present() {
        let layout = app_layout(Rect::new(0, 0, 80, 30), true);
        assert_eq!(layout.banner.height, 4);
    }

    #[test]
    fn one_stat_rect_per_card() {
        let layout = analytics_layout(Rect::new(0, 0, 100, 40), 5);
        assert_eq!(layout.stats.len(), 5);
        assert!(layout.stats.iter().all(|r| r.height == 5));
    }

    #[test]
    fn centered_box_is_clipped() {
        let area = Rect::new(10, 10, 20, 6);
        assert_eq!(centered(area, 10, 2), Rect::new(15, 12, 10, 2));
        assert_eq!(centered(area, 50, 50), area);
    }
}
