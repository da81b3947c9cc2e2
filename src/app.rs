// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the session (batch → deck), the swipe gesture state for the
//! topmost card, and the screen switch between the card stack and the
//! summary. Every mutation goes through [`App::update`], and deck mutation
//! specifically happens only when a finished commit animation reports its
//! decision, so the deck invariants are easy to audit here.

use crate::deck::{Decision, Session};
use crate::i18n::I18n;
use crate::source::{CataasClient, BATCH_SIZE};
use crate::ui::state::{Completion, SwipeState};
use crate::ui::{cards, status, summary};
use iced::{time, window, Element, Subscription, Task, Theme};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Frame interval for swipe animations and the loading spinner.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Spinner phase advance per tick, in radians.
const SPINNER_SPEED: f32 = 0.15;

/// Screens the user can navigate between once a deck is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Cards,
    Summary,
}

/// Root application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    swipe: SwipeState,
    screen: Screen,
    spinner_phase: f32,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The batch fetch finished; possibly with fewer cards than requested,
    /// possibly empty.
    BatchLoaded(Vec<crate::deck::Card>),
    /// Primary button went down on the top card at this window X.
    CardPressed(f32),
    /// Pointer moved to this window X during a drag.
    CardMoved(f32),
    /// Pointer released (or left the canvas) during a drag.
    CardReleased,
    /// Accept button.
    Accept,
    /// Reject button.
    Reject,
    /// Restart from the summary screen; same deck, no re-fetch.
    Restart,
    /// Animation frame.
    Tick(Instant),
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            session: Session::Loading,
            swipe: SwipeState::default(),
            screen: Screen::Cards,
            spinner_phase: 0.0,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the batch fetch.
    fn new() -> (Self, Task<Message>) {
        let app = App::default();

        let task = match CataasClient::new() {
            Ok(client) => Task::perform(
                async move { client.fetch_batch(BATCH_SIZE).await },
                Message::BatchLoaded,
            ),
            Err(err) => {
                tracing::error!(%err, "failed to build HTTP client");
                Task::done(Message::BatchLoaded(Vec::new()))
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        // Frames are only needed while something moves on screen.
        if self.swipe.is_animating() || self.session.is_loading() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BatchLoaded(cards) => {
                if cards.is_empty() {
                    tracing::warn!("batch fetch produced no cats; session failed");
                    self.session = Session::Failed;
                } else {
                    tracing::info!(count = cards.len(), "batch ready");
                    self.session = Session::Active(crate::deck::Deck::new(cards));
                    self.screen = Screen::Cards;
                }
            }
            Message::CardPressed(x) => {
                if self.has_current_card() {
                    self.swipe.press(x);
                }
            }
            Message::CardMoved(x) => {
                self.swipe.move_to(x);
            }
            Message::CardReleased => {
                // Commit vs cancel is decided inside the gesture state; the
                // deck is only touched once the animation finishes.
                let _ = self.swipe.release(Instant::now());
            }
            Message::Accept => self.trigger(Decision::Accept),
            Message::Reject => self.trigger(Decision::Reject),
            Message::Restart => {
                if let Some(deck) = self.session.deck_mut() {
                    deck.restart();
                }
                self.swipe = SwipeState::default();
                self.screen = Screen::Cards;
            }
            Message::Tick(now) => {
                if self.session.is_loading() {
                    self.spinner_phase = (self.spinner_phase + SPINNER_SPEED) % std::f32::consts::TAU;
                }
                if let Some(Completion::Commit(decision)) = self.swipe.tick(now) {
                    self.commit(decision);
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.session {
            Session::Loading => status::loading(&self.i18n, self.spinner_phase),
            Session::Failed => status::failed(&self.i18n),
            Session::Active(deck) => match self.screen {
                Screen::Cards => cards::view(deck, &self.swipe, &self.i18n),
                Screen::Summary => summary::view(deck, &self.i18n),
            },
        }
    }

    /// Button path: same off-screen animation as a committed swipe.
    fn trigger(&mut self, decision: Decision) {
        if self.has_current_card() {
            self.swipe.trigger(decision, Instant::now());
        }
    }

    /// Applies a decision once its animation completed, then switches to
    /// the summary if that was the last card.
    fn commit(&mut self, decision: Decision) {
        let Some(deck) = self.session.deck_mut() else {
            return;
        };
        deck.decide(decision);
        if deck.is_exhausted() {
            self.screen = Screen::Summary;
        }
    }

    fn has_current_card(&self) -> bool {
        self.session
            .deck()
            .is_some_and(|deck| deck.current().is_some())
    }

    #[cfg(test)]
    fn with_deck(cards: Vec<crate::deck::Card>) -> Self {
        Self {
            session: Session::Active(crate::deck::Deck::new(cards)),
            ..Self::default()
        }
    }
}
