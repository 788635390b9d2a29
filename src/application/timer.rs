use super::events::{Event, EventSender};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

/// Emits [`Event::Tick`] once per period for as long as it is attached.
///
/// The first tick fires one full period after start. Dropping the timer detaches it.
pub struct CountdownTimer {
    handle: JoinHandle<()>,
}

impl CountdownTimer {
    pub fn start(period: Duration, events: EventSender) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if events.send(Event::Tick).is_err() {
                    debug!("tick receiver gone, stopping countdown timer");
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
