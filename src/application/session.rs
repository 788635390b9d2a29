use super::app::AppController;
use super::events::{Action, EventReceiver};
use super::timer::CountdownTimer;
use super::view::AppView;
use crate::domain::app_state::{AppState, Screen};
use crate::domain::ports::PaymentCatalogRef;
use crate::error::{PaymentSheetError, Result};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::info;

/// Tunables for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Starting value of the countdown.
    pub initial_seconds: u32,
    /// Time between countdown ticks.
    pub tick: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_seconds: 60,
            tick: Duration::from_secs(1),
        }
    }
}

struct Request {
    action: Action,
    reply: oneshot::Sender<Result<AppView>>,
}

/// The single-threaded event loop owning all session state.
///
/// Timer ticks, fetch completions and user requests are all serialized onto
/// [`run`](Session::run), which is the only place state is mutated. A fresh [`AppView`]
/// is published after every event.
pub struct Session {
    config: SessionConfig,
    controller: AppController,
    events: EventReceiver,
    requests: mpsc::Receiver<Request>,
    views: watch::Sender<AppView>,
}

/// Cloneable front door to a running [`Session`].
#[derive(Clone)]
pub struct SessionHandle {
    requests: mpsc::Sender<Request>,
    views: watch::Receiver<AppView>,
}

impl Session {
    pub fn new(config: SessionConfig, catalog: PaymentCatalogRef) -> (Self, SessionHandle) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (requests_tx, requests_rx) = mpsc::channel(32);
        let controller = AppController::new(config.initial_seconds, catalog, events_tx);
        let (views_tx, views_rx) = watch::channel(controller.view());

        let session = Self {
            config,
            controller,
            events: events_rx,
            requests: requests_rx,
            views: views_tx,
        };
        let handle = SessionHandle {
            requests: requests_tx,
            views: views_rx,
        };
        (session, handle)
    }

    /// Runs until every [`SessionHandle`] has been dropped, then returns the final state.
    pub async fn run(mut self) -> AppState {
        info!(
            seconds = self.config.initial_seconds,
            tick = ?self.config.tick,
            "session started"
        );
        let mut timer = Some(CountdownTimer::start(
            self.config.tick,
            self.controller.event_sender(),
        ));

        loop {
            let mut pending_reply = None;
            tokio::select! {
                Some(event) = self.events.recv() => self.controller.handle(event),
                request = self.requests.recv() => match request {
                    Some(Request { action, reply }) => {
                        let outcome = self.controller.perform(action).map(|()| self.controller.view());
                        pending_reply = Some((reply, outcome));
                    }
                    None => break,
                },
            }

            if timer.is_some() && self.controller.state().screen == Screen::Finished {
                timer = None;
            }
            // Publish before replying: a caller reading `view()` after `dispatch` must see it.
            self.views.send_replace(self.controller.view());
            if let Some((reply, outcome)) = pending_reply {
                let _ = reply.send(outcome);
            }
        }

        drop(timer);
        let state = self.controller.into_state();
        info!(screen = ?state.screen, "session stopped");
        state
    }
}

impl SessionHandle {
    /// Applies a user action and returns the resulting view.
    pub async fn dispatch(&self, action: Action) -> Result<AppView> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(Request { action, reply })
            .await
            .map_err(|_| PaymentSheetError::SessionClosed)?;
        response.await.map_err(|_| PaymentSheetError::SessionClosed)?
    }

    /// The most recently published view.
    pub fn view(&self) -> AppView {
        self.views.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppView> {
        self.views.clone()
    }
}
