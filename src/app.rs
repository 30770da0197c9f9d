//! Application state and key handling

use crate::config::FormConfig;
use crate::state::{AppState, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: FormConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(config: FormConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether an animation needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.state.button_press.is_some()
    }

    /// Clear the button press animation once it has expired
    pub fn update_button_press(&mut self) {
        if let Some(ref press) = self.state.button_press {
            if press.is_expired() {
                self.state.button_press = None;
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // The summary modal swallows every key while shown
        if self.state.show_modal() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.close_modal();
            }
            return;
        }

        self.handle_form_key(key);
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_select = self.state.focus == Focus::AttendingWithGuest;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('s') if ctrl => self.state.submit(),
            KeyCode::Enter => self.state.submit(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if on_select => {
                self.state.toggle_attendance()
            }
            KeyCode::Char(c) if !ctrl && !alt => self.state.input_char(c),
            KeyCode::Backspace => self.state.backspace(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldError, GuestAttendance};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::{Duration, Instant};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn test_app() -> App {
        App::new(FormConfig {
            show_icons: Some(true),
            ascii_icons: Some(true),
        })
    }

    /// Name, Email, Age filled in by keyboard; focus ends on the attendance select
    fn fill_form(app: &mut App, name: &str, email: &str, age: &str) {
        type_str(app, name);
        app.handle_key(press(KeyCode::Tab));
        type_str(app, email);
        app.handle_key(press(KeyCode::Tab));
        type_str(app, age);
        app.handle_key(press(KeyCode::Tab));
    }

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| crate::ui::draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_tab_and_backtab_move_focus() {
            let mut app = test_app();
            app.handle_key(press(KeyCode::Tab));
            assert_eq!(app.state.focus, Focus::Email);
            app.handle_key(press(KeyCode::Down));
            assert_eq!(app.state.focus, Focus::Age);
            app.handle_key(press(KeyCode::BackTab));
            assert_eq!(app.state.focus, Focus::Email);
            app.handle_key(press(KeyCode::Up));
            assert_eq!(app.state.focus, Focus::Name);
        }

        #[test]
        fn test_space_types_in_text_field_but_toggles_select() {
            let mut app = test_app();
            type_str(&mut app, "Ann Lee");
            assert_eq!(app.state.values().name, "Ann Lee");

            app.state.focus = Focus::AttendingWithGuest;
            app.handle_key(press(KeyCode::Char(' ')));
            assert_eq!(app.state.values().attending_with_guest, GuestAttendance::Yes);
            app.handle_key(press(KeyCode::Left));
            assert_eq!(app.state.values().attending_with_guest, GuestAttendance::No);
        }

        #[test]
        fn test_arrows_do_not_toggle_outside_select() {
            let mut app = test_app();
            app.handle_key(press(KeyCode::Right));
            assert_eq!(app.state.values().attending_with_guest, GuestAttendance::No);
        }

        #[test]
        fn test_control_chars_are_not_typed() {
            let mut app = test_app();
            app.handle_key(ctrl('a'));
            assert_eq!(app.state.values().name, "");
        }

        #[test]
        fn test_esc_quits_from_form() {
            let mut app = test_app();
            assert!(!app.should_quit());
            app.handle_key(press(KeyCode::Esc));
            assert!(app.should_quit());
        }

        #[test]
        fn test_release_events_are_ignored() {
            let mut app = test_app();
            let mut key = press(KeyCode::Char('x'));
            key.kind = KeyEventKind::Release;
            app.handle_key(key);
            assert_eq!(app.state.values().name, "");
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submission_shows_summary() {
            let mut app = test_app();
            fill_form(&mut app, "Ann", "ann@x.com", "30");
            app.handle_key(press(KeyCode::Enter));

            assert!(app.state.show_modal());
            let output = render(&app);
            assert!(output.contains("Submitted Data"));
            assert!(output.contains("Name: Ann"));
            assert!(output.contains("Email: ann@x.com"));
            assert!(output.contains("Age: 30"));
            assert!(output.contains("Attending with Guest: No"));
            assert!(!output.contains("Guest Name:"));
        }

        #[test]
        fn test_invalid_email_blocks_summary() {
            let mut app = test_app();
            fill_form(&mut app, "Ann", "bad", "30");
            app.handle_key(press(KeyCode::Enter));

            assert!(app.state.submitted);
            assert!(!app.state.show_modal());
            assert_eq!(app.state.errors().email, Some(FieldError::EmailInvalid));
            let output = render(&app);
            assert!(!output.contains("Submitted Data"));
            assert!(output.contains("Email must be a valid email address"));
        }

        #[test]
        fn test_guest_name_required_then_resubmit() {
            let mut app = test_app();
            fill_form(&mut app, "Ann", "ann@x.com", "30");
            app.handle_key(press(KeyCode::Right));
            assert_eq!(app.state.values().attending_with_guest, GuestAttendance::Yes);

            app.handle_key(press(KeyCode::Enter));
            assert!(!app.state.show_modal());
            let output = render(&app);
            assert!(output.contains("Guest name is required if attending with a guest"));

            app.handle_key(press(KeyCode::Tab));
            assert_eq!(app.state.focus, Focus::GuestName);
            type_str(&mut app, "Bo");
            app.handle_key(press(KeyCode::Enter));

            assert!(app.state.show_modal());
            let output = render(&app);
            assert!(output.contains("Attending with Guest: Yes"));
            assert!(output.contains("Guest Name: Bo"));
        }

        #[test]
        fn test_ctrl_s_submits_from_any_field() {
            let mut app = test_app();
            app.handle_key(ctrl('s'));
            assert!(app.state.submitted);
            assert_eq!(app.state.errors().len(), 3);
            assert_eq!(app.state.values().name, "");
        }

        #[test]
        fn test_closing_summary_keeps_values() {
            let mut app = test_app();
            fill_form(&mut app, "Ann", "ann@x.com", "30");
            app.handle_key(press(KeyCode::Enter));
            assert!(app.state.show_modal());

            app.handle_key(press(KeyCode::Esc));
            assert!(!app.state.show_modal());
            assert!(!app.should_quit());
            assert_eq!(app.state.values().name, "Ann");
            assert!(!render(&app).contains("Submitted Data"));
        }

        #[test]
        fn test_modal_ignores_other_keys() {
            let mut app = test_app();
            fill_form(&mut app, "Ann", "ann@x.com", "30");
            app.handle_key(press(KeyCode::Enter));

            app.state.focus = Focus::Name;
            type_str(&mut app, "xyz");
            app.handle_key(press(KeyCode::Tab));
            assert!(app.state.show_modal());
            assert_eq!(app.state.values().name, "Ann");
            assert_eq!(app.state.focus, Focus::Name);
        }

        #[test]
        fn test_fixing_errors_requires_resubmit() {
            let mut app = test_app();
            app.handle_key(press(KeyCode::Enter));
            fill_form(&mut app, "Ann", "ann@x.com", "30");
            // Errors from the last submit stay visible while editing
            assert!(render(&app).contains("Name is required"));

            app.handle_key(press(KeyCode::Enter));
            assert!(app.state.show_modal());
        }
    }

    mod button_press {
        use super::*;
        use crate::state::ButtonPressState;

        #[test]
        fn test_update_button_press_clears_expired() {
            let mut app = test_app();
            app.state.button_press = Some(ButtonPressState {
                pressed_at: Instant::now() - Duration::from_millis(200),
            });
            app.update_button_press();
            assert!(app.state.button_press.is_none());
            assert!(!app.is_animating());
        }

        #[test]
        fn test_update_button_press_keeps_active() {
            let mut app = test_app();
            app.handle_key(press(KeyCode::Enter));
            app.update_button_press();
            assert!(app.is_animating());
        }
    }
}
