use crate::app::animation::CountAnimator;
use crate::app::confetti::Confetti;
use crate::config::AppConfig;
use crate::rsvp::{Phase, RsvpView, ViewEffect};
use crate::store::{Counts, ResponseKind, ResponseStore};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Display columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

/// Field contents of both forms. Only one form is visible at a time.
#[derive(Debug)]
pub struct FormState {
    pub name: InputState,
    pub email: InputState,
    pub message: InputState,
    pub focus: FormField,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: InputState::new(),
            email: InputState::new(),
            message: InputState::new(),
            focus: FormField::Name,
        }
    }

    pub fn open(&mut self, kind: ResponseKind) {
        self.focus = match kind {
            ResponseKind::Yes => FormField::Name,
            ResponseKind::No => FormField::Message,
        };
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = FormField::Name;
    }

    pub fn focused_mut(&mut self) -> &mut InputState {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Name and email alternate; the decline form has a single field.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Message,
        };
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Acknowledge,
    Copied,
    Notice,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub view: RsvpView,
    pub form: FormState,
    pub yes_display: CountAnimator,
    pub no_display: CountAnimator,
    pub confetti: Option<Confetti>,
    pub toast: Option<Toast>,
    /// Raw link revealed after a copy or share failure.
    pub show_link_fallback: bool,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, store: ResponseStore) -> Self {
        let view = RsvpView::new(store, config.event.page_url.clone());
        let animation = Duration::from_millis(config.ui.count_animation_ms);
        let mut state = Self {
            config,
            view,
            form: FormState::new(),
            yes_display: CountAnimator::new(animation),
            no_display: CountAnimator::new(animation),
            confetti: None,
            toast: None,
            show_link_fallback: false,
            should_quit: false,
            dirty: true,
        };
        // Totals count up from zero on start.
        let counts = state.view.counts();
        state.retarget_counts(counts, Instant::now());
        state
    }

    pub fn phase(&self) -> Phase {
        self.view.phase()
    }

    pub fn native_share_available(&self) -> bool {
        self.config
            .share
            .native_command
            .as_ref()
            .is_some_and(|cmd| !cmd.is_empty())
    }

    pub fn retarget_counts(&mut self, counts: Counts, now: Instant) {
        self.yes_display.retarget(counts.yes, now);
        self.no_display.retarget(counts.no, now);
        self.dirty = true;
    }

    pub fn show_toast(&mut self, text: impl Into<String>, kind: ToastKind, now: Instant) {
        self.toast = Some(Toast {
            text: text.into(),
            kind,
            expires_at: now + Duration::from_millis(self.config.ui.toast_ms),
        });
        self.dirty = true;
    }

    /// Apply the view's render instructions to the presentation state.
    pub fn apply_effects(&mut self, effects: Vec<ViewEffect>, now: Instant) {
        for effect in effects {
            match effect {
                ViewEffect::ShowForm(kind) => {
                    self.form.open(kind);
                    self.toast = None;
                }
                ViewEffect::ShowIdle => self.form.reset(),
                ViewEffect::ShowSuccess { .. } => self.form.reset(),
                ViewEffect::Counts(counts) => self.retarget_counts(counts, now),
                ViewEffect::Celebrate => {
                    let ttl = Duration::from_millis(self.config.ui.confetti_ms);
                    self.confetti = Some(Confetti::burst(self.config.ui.confetti_pieces, ttl, now));
                }
                ViewEffect::Acknowledge(text) => self.show_toast(text, ToastKind::Acknowledge, now),
                ViewEffect::Invalid(text) => self.show_toast(text, ToastKind::Notice, now),
                ViewEffect::WriteFailed(text) => self.show_toast(text, ToastKind::Error, now),
            }
        }
        self.dirty = true;
    }

    /// Advance animations and expire overlays.
    pub fn advance(&mut self, now: Instant) {
        if self.yes_display.tick(now) | self.no_display.tick(now) {
            self.dirty = true;
        }
        if let Some(confetti) = &self.confetti {
            self.dirty = true;
            if confetti.is_expired(now) {
                self.confetti = None;
            }
        }
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        let counts = self.view.counts();
        format!("{} going · {} not going", counts.yes, counts.no)
    }
}
