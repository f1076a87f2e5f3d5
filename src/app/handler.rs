use crate::app::action::Action;
use crate::app::event::{AppEvent, ShareChannel};
use crate::app::state::*;
use crate::rsvp::{Phase, Submission};
use crate::share::{SharePayload, SharePlatform, ShareOutcome};
use crate::store::ResponseKind;
use chrono::Utc;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub const COPIED_TEXT: &str = "✓ Copied!";

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::CopyFinished { result } => {
            handle_copy_finished(state, result);
            vec![]
        }
        AppEvent::ShareFinished { channel, outcome } => {
            handle_share_finished(state, channel, outcome);
            vec![]
        }
        AppEvent::Tick => {
            state.advance(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    if state.phase().is_form() {
        handle_form_key(state, key)
    } else {
        handle_board_key(state, key)
    }
}

/// Keys while the answer buttons are showing (idle or after a "yes").
fn handle_board_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let now = Instant::now();
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            let effects = state.view.select(ResponseKind::Yes);
            state.apply_effects(effects, now);
            vec![]
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            let effects = state.view.select(ResponseKind::No);
            state.apply_effects(effects, now);
            vec![]
        }
        KeyCode::Char('c') | KeyCode::Char('C') => vec![Action::CopyLink {
            url: state.view.share_url().to_string(),
        }],
        KeyCode::Char('w') | KeyCode::Char('W') => share_intent(state, SharePlatform::WhatsApp),
        KeyCode::Char('t') | KeyCode::Char('T') => share_intent(state, SharePlatform::Twitter),
        KeyCode::Char('s') | KeyCode::Char('S') => native_share(state),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let now = Instant::now();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            let effects = state.view.cancel();
            state.apply_effects(effects, now);
        }
        KeyCode::Enter => submit_form(state, now),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => state.form.cycle_focus(),
        KeyCode::Backspace => state.form.focused_mut().delete_back(),
        KeyCode::Delete => state.form.focused_mut().delete_forward(),
        KeyCode::Left => state.form.focused_mut().move_left(),
        KeyCode::Right => state.form.focused_mut().move_right(),
        KeyCode::Home => state.form.focused_mut().move_home(),
        KeyCode::End => state.form.focused_mut().move_end(),
        KeyCode::Char('w') if ctrl => state.form.focused_mut().delete_word_back(),
        KeyCode::Char('u') if ctrl => state.form.focused_mut().clear(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            state.form.focused_mut().insert_char(c)
        }
        _ => {}
    }
    vec![]
}

fn submit_form(state: &mut AppState, now: Instant) {
    let submission = match state.phase() {
        Phase::AcceptingForm => Submission::Accept {
            name: state.form.name.text.clone(),
            email: state.form.email.text.clone(),
        },
        Phase::DecliningForm => Submission::Decline {
            message: state.form.message.text.clone(),
        },
        Phase::Idle | Phase::Success => return,
    };
    let effects = state.view.submit(submission, Utc::now());
    state.apply_effects(effects, now);
}

fn share_intent(state: &AppState, platform: SharePlatform) -> Vec<Action> {
    let url = platform.intent_url(state.view.share_url(), &state.config.event.share_message);
    vec![Action::OpenIntent { platform, url }]
}

fn native_share(state: &AppState) -> Vec<Action> {
    let Some(command) = state.config.share.native_command.clone().filter(|c| !c.is_empty()) else {
        return vec![];
    };
    let event = &state.config.event;
    let payload = SharePayload {
        title: event.share_title.clone(),
        text: event.native_share_text.clone(),
        url: state.view.share_url().to_string(),
    };
    vec![Action::NativeShare { command, payload }]
}

fn handle_copy_finished(state: &mut AppState, result: Result<(), String>) {
    match result {
        Ok(()) => state.show_toast(COPIED_TEXT, ToastKind::Copied, Instant::now()),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard copy failed, showing raw link");
            state.show_link_fallback = true;
            state.dirty = true;
        }
    }
}

fn handle_share_finished(state: &mut AppState, channel: ShareChannel, outcome: ShareOutcome) {
    match (channel, outcome) {
        (_, ShareOutcome::Completed) => {
            tracing::debug!(?channel, "share completed");
        }
        (_, ShareOutcome::Cancelled) => {
            tracing::debug!(?channel, "share cancelled");
        }
        (ShareChannel::Intent(platform), ShareOutcome::Failed(reason)) => {
            tracing::warn!(platform = platform.label(), %reason, "share intent failed, showing raw link");
            state.show_link_fallback = true;
            state.dirty = true;
        }
        (ShareChannel::Native, ShareOutcome::Failed(reason)) => {
            tracing::error!(%reason, "native share failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::response_store::DEFAULT_STORAGE_KEY;
    use crate::store::{Counts, MemoryKvStore, ResponseStore};

    fn state() -> AppState {
        let store = ResponseStore::new(Box::new(MemoryKvStore::new()), DEFAULT_STORAGE_KEY);
        AppState::new(AppConfig::default(), store)
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn rsvp_yes(state: &mut AppState, name: &str, email: &str) {
        press(state, KeyCode::Char('y'));
        type_text(state, name);
        press(state, KeyCode::Tab);
        type_text(state, email);
        press(state, KeyCode::Enter);
    }

    #[test]
    fn test_yes_flow() {
        let mut s = state();
        rsvp_yes(&mut s, "Asha", "a@x.com");

        assert_eq!(s.phase(), Phase::Success);
        assert_eq!(s.view.counts(), Counts { yes: 1, no: 0 });
        assert_eq!(s.view.store().load().accepted().next().map(|r| r.name.clone()), Some("Asha".to_string()));
        assert!(s.confetti.is_some());
        assert!(s.form.name.text.is_empty());
        assert_eq!(s.yes_display.target(), 1);
    }

    #[test]
    fn test_letters_in_form_are_text_not_commands() {
        let mut s = state();
        press(&mut s, KeyCode::Char('y'));
        let actions = {
            let mut all = Vec::new();
            for c in "quit now".chars() {
                all.extend(press(&mut s, KeyCode::Char(c)));
            }
            all
        };
        assert!(actions.is_empty());
        assert_eq!(s.form.name.text, "quit now");
    }

    #[test]
    fn test_missing_email_stays_in_form() {
        let mut s = state();
        press(&mut s, KeyCode::Char('y'));
        type_text(&mut s, "Asha");
        press(&mut s, KeyCode::Enter);

        assert_eq!(s.phase(), Phase::AcceptingForm);
        assert_eq!(s.toast.as_ref().map(|t| t.kind), Some(ToastKind::Notice));
        assert_eq!(s.form.name.text, "Asha");
        assert_eq!(s.view.counts(), Counts::default());
    }

    #[test]
    fn test_blank_decline() {
        let mut s = state();
        press(&mut s, KeyCode::Char('n'));
        press(&mut s, KeyCode::Enter);

        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.view.store().load().declined().next().map(|r| r.message.clone()), Some("(No message)".to_string()));
        assert_eq!(s.toast.as_ref().map(|t| t.kind), Some(ToastKind::Acknowledge));
    }

    #[test]
    fn test_decline_with_message() {
        let mut s = state();
        press(&mut s, KeyCode::Char('n'));
        type_text(&mut s, "  out of town  ");
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.view.store().load().declined().next().map(|r| r.message.clone()), Some("out of town".to_string()));
    }

    #[test]
    fn test_escape_leaves_form() {
        let mut s = state();
        press(&mut s, KeyCode::Char('y'));
        type_text(&mut s, "half typed");
        press(&mut s, KeyCode::Esc);

        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.form.name.text.is_empty());
        assert_eq!(s.view.counts(), Counts::default());
    }

    #[test]
    fn test_repeat_submissions_count_up() {
        let mut s = state();
        for _ in 0..5 {
            rsvp_yes(&mut s, "Asha", "a@x.com");
        }
        assert_eq!(s.view.counts().yes, 5);

        let later = Instant::now() + std::time::Duration::from_secs(1);
        s.advance(later);
        assert_eq!(s.yes_display.displayed(), 5);
    }

    #[test]
    fn test_share_keys() {
        let mut s = state();
        assert_eq!(
            press(&mut s, KeyCode::Char('c')),
            vec![Action::CopyLink {
                url: "http://localhost:8000/".into()
            }]
        );

        let actions = press(&mut s, KeyCode::Char('w'));
        match actions.as_slice() {
            [Action::OpenIntent { platform, url }] => {
                assert_eq!(*platform, SharePlatform::WhatsApp);
                assert!(url.starts_with("https://wa.me/?text="));
                assert!(url.ends_with("%20http%3A%2F%2Flocalhost%3A8000%2F"));
            }
            other => panic!("unexpected actions: {:?}", other),
        }

        assert!(press(&mut s, KeyCode::Char('s')).is_empty());
        s.config.share.native_command = Some(vec!["share-helper".into()]);
        match press(&mut s, KeyCode::Char('s')).as_slice() {
            [Action::NativeShare { command, payload }] => {
                assert_eq!(command, &vec!["share-helper".to_string()]);
                assert_eq!(payload.title, "DKD Run 2026");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state();
        assert_eq!(press(&mut s, KeyCode::Char('q')), vec![Action::Quit]);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        press(&mut s, KeyCode::Char('y'));
        assert_eq!(handle_event(&mut s, AppEvent::Terminal(CEvent::Key(ctrl_c))), vec![Action::Quit]);
    }

    #[test]
    fn test_copy_outcomes() {
        let mut s = state();
        handle_event(&mut s, AppEvent::CopyFinished { result: Ok(()) });
        assert_eq!(s.toast.as_ref().map(|t| t.text.as_str()), Some(COPIED_TEXT));
        assert!(!s.show_link_fallback);

        handle_event(&mut s, AppEvent::CopyFinished { result: Err("no tty".into()) });
        assert!(s.show_link_fallback);
    }

    #[test]
    fn test_share_outcomes() {
        let mut s = state();
        handle_event(
            &mut s,
            AppEvent::ShareFinished {
                channel: ShareChannel::Native,
                outcome: ShareOutcome::Cancelled,
            },
        );
        handle_event(
            &mut s,
            AppEvent::ShareFinished {
                channel: ShareChannel::Native,
                outcome: ShareOutcome::Failed("boom".into()),
            },
        );
        assert!(!s.show_link_fallback);
        assert!(s.toast.is_none());

        handle_event(
            &mut s,
            AppEvent::ShareFinished {
                channel: ShareChannel::Intent(SharePlatform::Twitter),
                outcome: ShareOutcome::Failed("no opener".into()),
            },
        );
        assert!(s.show_link_fallback);
    }

    #[test]
    fn test_success_keeps_buttons_live() {
        let mut s = state();
        rsvp_yes(&mut s, "Asha", "a@x.com");
        press(&mut s, KeyCode::Char('n'));
        assert_eq!(s.phase(), Phase::DecliningForm);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.view.counts(), Counts { yes: 1, no: 1 });
    }
}
