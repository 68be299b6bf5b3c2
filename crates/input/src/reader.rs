//! Background terminal reader.
//!
//! [`InputThread`] polls for events on its own thread and forwards key and
//! resize events over a channel. Dropping it stops and joins the thread, so
//! an early return from the game loop never leaves a reader polling a
//! terminal that has already been restored.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event};

/// How long one poll may block before the stop flag is checked again.
pub const INPUT_POLL: Duration = Duration::from_millis(50);

pub struct InputThread {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<io::Result<()>>>,
}

impl InputThread {
    /// Read from the terminal through crossterm.
    pub fn spawn(tx: Sender<Event>) -> Self {
        Self::spawn_with(tx, |timeout| {
            if event::poll(timeout)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })
    }

    /// Read from `next`, which waits at most the given timeout and returns
    /// `None` when nothing arrived.
    pub fn spawn_with<F>(tx: Sender<Event>, mut next: F) -> Self
    where
        F: FnMut(Duration) -> io::Result<Option<Event>> + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                let Some(ev) = next(INPUT_POLL)? else {
                    continue;
                };
                if matches!(ev, Event::Key(_) | Event::Resize(_, _)) && tx.send(ev).is_err() {
                    break;
                }
            }
            Ok(())
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn is_stopping(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Stop the reader and report how it ended.
    pub fn finish(mut self) -> io::Result<()> {
        self.stop.store(true, Ordering::Relaxed);
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| io::Error::other("input thread panicked"))?,
            None => Ok(()),
        }
    }
}

impl Drop for InputThread {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::mpsc;

    fn idle_source(alive: Arc<()>) -> impl FnMut(Duration) -> io::Result<Option<Event>> + Send {
        move |timeout| {
            let _ = &alive;
            thread::sleep(timeout.min(Duration::from_millis(1)));
            Ok(None)
        }
    }

    fn run_loop_that_fails(reader: InputThread) -> io::Result<()> {
        let _reader = reader;
        Err(io::Error::other("draw failed"))
    }

    #[test]
    fn test_drop_joins_reader_on_early_error() {
        let alive = Arc::new(());
        let (tx, _rx) = mpsc::channel();
        let reader = InputThread::spawn_with(tx, idle_source(Arc::clone(&alive)));
        assert_eq!(Arc::strong_count(&alive), 2);

        assert!(run_loop_that_fails(reader).is_err());
        // Joined: the reader closure and its captures are gone.
        assert_eq!(Arc::strong_count(&alive), 1);
    }

    #[test]
    fn test_forwards_key_events_and_finishes() {
        let (tx, rx) = mpsc::channel();
        let mut sent = false;
        let reader = InputThread::spawn_with(tx, move |_| {
            if sent {
                thread::sleep(Duration::from_millis(1));
                return Ok(None);
            }
            sent = true;
            Ok(Some(Event::Key(KeyEvent::new(
                KeyCode::Char('a'),
                KeyModifiers::NONE,
            ))))
        });

        let ev = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(ev, Event::Key(k) if k.code == KeyCode::Char('a')));
        assert!(!reader.is_stopping());
        reader.finish().unwrap();
    }

    #[test]
    fn test_read_error_is_reported_by_finish() {
        let (tx, _rx) = mpsc::channel();
        let reader = InputThread::spawn_with(tx, |_| Err(io::Error::other("tty gone")));
        let err = reader.finish().unwrap_err();
        assert_eq!(err.to_string(), "tty gone");
    }
}
