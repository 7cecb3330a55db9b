use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

/// Turns terminal input into [`EventType`]s, yielding a `Tick` when idle.
pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Drain terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(Self::classify(crossterm::event::read()?));
        }

        let elapsed = self.last_tick.elapsed();
        if elapsed < self.tick_rate {
            tokio::time::sleep(self.tick_rate - elapsed).await;
            if poll(Duration::from_millis(0))? {
                return Ok(Self::classify(crossterm::event::read()?));
            }
        }

        self.last_tick = Instant::now();
        Ok(EventType::Tick)
    }

    /// Map a raw crossterm event onto the events the app cares about
    pub fn classify(event: Event) -> EventType {
        match event {
            // Release/repeat reports only arrive with keyboard enhancement; ignore them
            Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
            Event::Mouse(mouse) => EventType::Mouse(mouse),
            Event::Resize(w, h) => EventType::Resize(w, h),
            Event::FocusLost => EventType::FocusLost,
            _ => EventType::Other,
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    FocusLost,
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::constants::TICK_RATE_DEFAULT_MS))
    }
}
