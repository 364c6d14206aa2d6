//! Event hub — multiplexes terminal input, a periodic tick, and content
//! load completions into a single async channel.

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum Event {
    /// Terminal key press
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resized
    #[allow(dead_code)]
    Resize(u16, u16),
    /// Periodic tick (1 second)
    Tick,
    /// A detail load finished. `generation` is the value current when the
    /// load was spawned; stale generations are discarded by the app.
    ContentLoaded { generation: u64, text: String },
}

pub struct EventHandler {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn crossterm event reader
        let tx_key = tx.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            while let Some(Ok(evt)) = reader.next().await {
                match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        if tx_key.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                    CrosstermEvent::Mouse(mouse) => {
                        if tx_key.send(Event::Mouse(mouse)).is_err() {
                            break;
                        }
                    }
                    CrosstermEvent::Resize(w, h) => {
                        if tx_key.send(Event::Resize(w, h)).is_err() {
                            break;
                        }
                    }
                    _ => {}
                }
            }
        });

        // Spawn tick timer
        let tx_tick = tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
            loop {
                interval.tick().await;
                if tx_tick.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        EventHandler { tx, rx }
    }

    /// A sender for tasks that report back into the loop (detail loads).
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
