use std::str::FromStr;
use std::time::Duration;

use ratatui::style::Color;

/// How long the main loop waits for terminal input before checking for
/// fetch completions.
pub const INPUT_POLL: Duration = Duration::from_millis(50);

pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const MUTED: Color = Color::DarkGray;
pub const REMOTE: Color = Color::Rgb(0x2d, 0xd4, 0xbf);

pub const SEARCH_PLACEHOLDER: &str = "Search job title or company...";
pub const LOCATION_PLACEHOLDER: &str = "Location (City, State)...";
pub const NO_RESULTS_TITLE: &str = "No jobs found matching your criteria";
pub const NO_RESULTS_HINT: &str = "Try adjusting your filters or search terms";
pub const APPLY_LABEL: &str = "Apply Now";

pub const HELP_BOARD: &str =
    " F1-F4:pages  Tab:focus  \u{2190}/\u{2192}:change  \u{2191}/\u{2193}:select  Enter:apply  F5:retry  Esc:quit";
pub const HELP_ANALYTICS: &str = " F1-F4:pages  F5:retry  Esc:quit";
pub const HELP_AUTH: &str = " F1-F4:pages  Tab:next field  Enter:submit  Esc:quit";

/// Parses a `#rrggbb` palette entry, falling back to gray.
pub fn hex_color(hex: &str) -> Color {
    Color::from_str(hex).unwrap_or(Color::Gray)
}
