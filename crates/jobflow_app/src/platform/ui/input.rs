use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use jobflow_core::{
    AppViewModel, AuthFormView, AuthMode, BoardView, BodyView, ListingPanel, Msg, Route,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardFocus {
    #[default]
    Search,
    Location,
    EmploymentType,
    Remote,
    Results,
}

impl BoardFocus {
    const ORDER: [BoardFocus; 5] = [
        BoardFocus::Search,
        BoardFocus::Location,
        BoardFocus::EmploymentType,
        BoardFocus::Remote,
        BoardFocus::Results,
    ];

    fn step(self, forward: bool) -> Self {
        let len = Self::ORDER.len();
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward { idx + 1 } else { idx + len - 1 };
        Self::ORDER[next % len]
    }
}

/// Terminal-only state: focus and selection. Everything else lives in
/// `AppState` and reaches the UI through the view model.
#[derive(Debug, Default)]
pub struct UiState {
    pub board_focus: BoardFocus,
    pub selected_job: usize,
    pub auth_focus: usize,
    route: Option<Route>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Quit,
    Send(Msg),
    /// Focus or selection moved; nothing to tell the reducer.
    Redraw,
    Ignored,
}

impl UiState {
    /// Keeps selection inside the current job list and resets auth focus
    /// whenever the route changes.
    pub fn sync(&mut self, view: &AppViewModel) {
        if self.route != Some(view.route) {
            self.route = Some(view.route);
            self.auth_focus = 0;
        }
        let jobs = match &view.body {
            BodyView::Board(BoardView {
                listings: ListingPanel::Jobs(cards),
                ..
            }) => cards.len(),
            _ => 0,
        };
        self.selected_job = self.selected_job.min(jobs.saturating_sub(1));
    }
}

pub fn handle_key(ui: &mut UiState, key: KeyEvent, view: &AppViewModel) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Ignored;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Char('c') if ctrl => return KeyOutcome::Quit,
        KeyCode::F(1) => return KeyOutcome::Send(Msg::Navigate(Route::Board)),
        KeyCode::F(2) => return KeyOutcome::Send(Msg::Navigate(Route::Analytics)),
        KeyCode::F(3) => return KeyOutcome::Send(Msg::Navigate(Route::Auth(AuthMode::Login))),
        KeyCode::F(4) => {
            return KeyOutcome::Send(Msg::Navigate(Route::Auth(AuthMode::Register)))
        }
        KeyCode::F(5) if view.error.is_some() => return KeyOutcome::Send(Msg::RetryClicked),
        KeyCode::Char('r') if ctrl && view.error.is_some() => {
            return KeyOutcome::Send(Msg::RetryClicked)
        }
        _ => {}
    }
    match &view.body {
        BodyView::Board(board) => board_key(ui, key, board),
        BodyView::Auth(form) => auth_key(ui, key, form),
        BodyView::Analytics(_) => KeyOutcome::Ignored,
    }
}

fn board_key(ui: &mut UiState, key: KeyEvent, board: &BoardView) -> KeyOutcome {
    match key.code {
        KeyCode::Tab => {
            ui.board_focus = ui.board_focus.step(true);
            return KeyOutcome::Redraw;
        }
        KeyCode::BackTab => {
            ui.board_focus = ui.board_focus.step(false);
            return KeyOutcome::Redraw;
        }
        _ => {}
    }
    let filters = &board.filters;
    match ui.board_focus {
        BoardFocus::Search => edit_text(&filters.search_text, key).map_or(
            KeyOutcome::Ignored,
            |text| KeyOutcome::Send(Msg::SearchChanged(text)),
        ),
        BoardFocus::Location => edit_text(&filters.location_text, key).map_or(
            KeyOutcome::Ignored,
            |text| KeyOutcome::Send(Msg::LocationChanged(text)),
        ),
        BoardFocus::EmploymentType => match cycle_direction(key) {
            Some(true) => KeyOutcome::Send(Msg::EmploymentTypeChanged(
                filters.employment_type.next(),
            )),
            Some(false) => KeyOutcome::Send(Msg::EmploymentTypeChanged(
                filters.employment_type.prev(),
            )),
            None => KeyOutcome::Ignored,
        },
        BoardFocus::Remote => match cycle_direction(key) {
            Some(true) => KeyOutcome::Send(Msg::RemotePreferenceChanged(
                filters.remote_preference.next(),
            )),
            Some(false) => KeyOutcome::Send(Msg::RemotePreferenceChanged(
                filters.remote_preference.prev(),
            )),
            None => KeyOutcome::Ignored,
        },
        BoardFocus::Results => results_key(ui, key, &board.listings),
    }
}

fn results_key(ui: &mut UiState, key: KeyEvent, listings: &ListingPanel) -> KeyOutcome {
    let ListingPanel::Jobs(cards) = listings else {
        return KeyOutcome::Ignored;
    };
    match key.code {
        KeyCode::Down | KeyCode::Char('j') if ui.selected_job + 1 < cards.len() => {
            ui.selected_job += 1;
            KeyOutcome::Redraw
        }
        KeyCode::Up | KeyCode::Char('k') if ui.selected_job > 0 => {
            ui.selected_job -= 1;
            KeyOutcome::Redraw
        }
        KeyCode::Enter => cards
            .get(ui.selected_job)
            .map_or(KeyOutcome::Ignored, |card| {
                KeyOutcome::Send(Msg::ApplyClicked {
                    job_id: card.id.clone(),
                })
            }),
        _ => KeyOutcome::Ignored,
    }
}

fn auth_key(ui: &mut UiState, key: KeyEvent, form: &AuthFormView) -> KeyOutcome {
    if form.fields.is_empty() {
        return KeyOutcome::Ignored;
    }
    let len = form.fields.len();
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            ui.auth_focus = (ui.auth_focus + 1) % len;
            KeyOutcome::Redraw
        }
        KeyCode::BackTab | KeyCode::Up => {
            ui.auth_focus = (ui.auth_focus + len - 1) % len;
            KeyOutcome::Redraw
        }
        KeyCode::Enter => KeyOutcome::Send(Msg::AuthSubmitted),
        _ => {
            let field = &form.fields[ui.auth_focus.min(len - 1)];
            edit_text(&field.value, key).map_or(KeyOutcome::Ignored, |value| {
                KeyOutcome::Send(Msg::AuthFieldChanged {
                    field: field.field,
                    value,
                })
            })
        }
    }
}

/// Applies a printable character or backspace to `current`.
fn edit_text(current: &str, key: KeyEvent) -> Option<String> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => {
            let mut text = current.to_string();
            text.push(c);
            Some(text)
        }
        KeyCode::Backspace if !current.is_empty() => {
            let mut text = current.to_string();
            text.pop();
            Some(text)
        }
        _ => None,
    }
}

/// `Some(true)` steps forward through a select, `Some(false)` back.
fn cycle_direction(key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => Some(true),
        KeyCode::Left => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobflow_core::{AppState, AuthField, EmploymentType, RemotePreference};
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view_on(route: Route) -> AppViewModel {
        let (state, _) = jobflow_core::update(AppState::new(), Msg::Navigate(route));
        state.view()
    }

    #[test]
    fn typing_appends_to_search() {
        let mut ui = UiState::default();
        let view = view_on(Route::Board);
        assert_eq!(
            handle_key(&mut ui, press(KeyCode::Char('r')), &view),
            KeyOutcome::Send(Msg::SearchChanged("r".into()))
        );
    }

    #[test]
    fn backspace_on_empty_field_is_ignored() {
        let mut ui = UiState::default();
        let view = view_on(Route::Board);
        assert_eq!(
            handle_key(&mut ui, press(KeyCode::Backspace), &view),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn tab_cycles_board_focus() {
        let mut ui = UiState::default();
        let view = view_on(Route::Board);
        for _ in 0..2 {
            assert_eq!(
                handle_key(&mut ui, press(KeyCode::Tab), &view),
                KeyOutcome::Redraw
            );
        }
        assert_eq!(ui.board_focus, BoardFocus::EmploymentType);
        assert_eq!(
            handle_key(&mut ui, press(KeyCode::Right), &view),
            KeyOutcome::Send(Msg::EmploymentTypeChanged(EmploymentType::FullTime))
        );

        ui.board_focus = BoardFocus::Search;
        handle_key(&mut ui, press(KeyCode::BackTab), &view);
        assert_eq!(ui.board_focus, BoardFocus::Results);
    }

    #[test]
    fn remote_select_steps_backwards() {
        let mut ui = UiState {
            board_focus: BoardFocus::Remote,
            ..UiState::default()
        };
        let view = view_on(Route::Board);
        assert_eq!(
            handle_key(&mut ui, press(KeyCode::Left), &view),
            KeyOutcome::Send(Msg::RemotePreferenceChanged(RemotePreference::OnSiteOnly))
        );
    }

    #[test]
    fn function_keys_navigate() {
        let mut ui = UiState::default();
        let view = view_on(Route::Board);
        assert_eq!(
            handle_key(&mut ui, press(KeyCode::F(2)), &view),
            KeyOutcome::Send(Msg::Navigate(Route::Analytics))
        );
        assert_eq!(
            handle_key(&mut ui, press(KeyCode::F(4)), &view),
            KeyOutcome::Send(Msg::Navigate(Route::Auth(AuthMode::Register)))
        );
    }

    #[test]
    fn retry_needs_an_error_banner() {
        let mut ui = UiState::default();
        let view = view_on(Route::Board);
        assert_eq!(
            handle_key(&mut ui, press(KeyCode::F(5)), &view),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut ui = UiState::default();
        let view = view_on(Route::Analytics);
        assert_eq!(
            handle_key(&mut ui, press(KeyCode::Esc), &view),
            KeyOutcome::Quit
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut ui, ctrl_c, &view), KeyOutcome::Quit);
    }

    #[test]
    fn auth_typing_targets_focused_field() {
        let mut ui = UiState::default();
        let view = view_on(Route::Auth(AuthMode::Login));
        ui.sync(&view);
        assert_eq!(
            handle_key(&mut ui, press(KeyCode::Char('a')), &view),
            KeyOutcome::Send(Msg::AuthFieldChanged {
                field: AuthField::Email,
                value: "a".into(),
            })
        );
        handle_key(&mut ui, press(KeyCode::Tab), &view);
        assert_eq!(
            handle_key(&mut ui, press(KeyCode::Char('x')), &view),
            KeyOutcome::Send(Msg::AuthFieldChanged {
                field: AuthField::Password,
                value: "x".into(),
            })
        );
        assert_eq!(
            handle_key(&mut ui, press(KeyCode::Enter), &view),
            KeyOutcome::Send(Msg::AuthSubmitted)
        );
    }

    #[test]
    fn route_change_resets_auth_focus() {
        let mut ui = UiState {
            auth_focus: 2,
            ..UiState::default()
        };
        ui.sync(&view_on(Route::Auth(AuthMode::Register)));
        assert_eq!(ui.auth_focus, 0);
    }

    #[test]
    fn selection_is_clamped_without_jobs() {
        let mut ui = UiState {
            selected_job: 4,
            ..UiState::default()
        };
        ui.sync(&view_on(Route::Board));
        assert_eq!(ui.selected_job, 0);
    }
}
