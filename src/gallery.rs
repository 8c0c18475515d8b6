//! Image gallery slideshow
//!
//! A small state machine over a fixed slide deck (current index, playing
//! flag, wrap-around navigation) plus a thread-backed player that emits an
//! advance event at a fixed interval while playback is on. The player's
//! lifecycle is tied to the UI playback toggle and is fully independent of
//! the settings core.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info};

/// Interval between automatic slide advances
pub const ADVANCE_INTERVAL: Duration = Duration::from_secs(3);

/// A slide in the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Deck-unique identifier
    pub id: u32,
    /// Image URL
    pub src: &'static str,
    /// Title overlaid on the image
    pub title: &'static str,
    /// Short description overlaid on the image
    pub description: &'static str,
}

/// The built-in slide deck
pub const SLIDES: [Slide; 6] = [
    Slide {
        id: 1,
        src: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=600&h=400&fit=crop",
        title: "Mountain peak",
        description: "Mountain landscape wrapped in fog",
    },
    Slide {
        id: 2,
        src: "https://images.unsplash.com/photo-1439066615861-d1af74d74000?w=600&h=400&fit=crop",
        title: "Still lake",
        description: "Crystal clear lake in the forest",
    },
    Slide {
        id: 3,
        src: "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=600&h=400&fit=crop",
        title: "Tropical beach",
        description: "Sunset on a tropical shore",
    },
    Slide {
        id: 4,
        src: "https://images.unsplash.com/photo-1500382017468-9049fed747ef?w=600&h=400&fit=crop",
        title: "Flower field",
        description: "Colorful flower field in spring",
    },
    Slide {
        id: 5,
        src: "https://images.unsplash.com/photo-1551632811-561732d1e306?w=600&h=400&fit=crop",
        title: "Snowy mountains",
        description: "Majestic snowy mountains in winter",
    },
    Slide {
        id: 6,
        src: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=600&h=400&fit=crop",
        title: "Forest trail",
        description: "Misty forest trail in autumn colors",
    },
];

/// Event emitted by the slideshow player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideEvent {
    /// The slideshow advanced to the slide at this index
    Advanced(usize),
}

/// Slideshow state machine
#[derive(Debug)]
pub struct Slideshow {
    slides: Vec<Slide>,
    current: usize,
    playing: bool,
}

impl Slideshow {
    /// Create a slideshow over the built-in deck
    pub fn new() -> Self {
        Self::with_slides(SLIDES.to_vec())
    }

    /// Create a slideshow over an explicit deck
    ///
    /// The deck must be non-empty; navigation wraps around it.
    pub fn with_slides(slides: Vec<Slide>) -> Self {
        assert!(!slides.is_empty(), "slideshow requires at least one slide");
        Self {
            slides,
            current: 0,
            playing: false,
        }
    }

    /// The currently shown slide
    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    /// Index of the currently shown slide
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides in the deck
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck is empty
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Whether automatic playback is on
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance to the next slide, wrapping to the first
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.slides.len();
        self.current
    }

    /// Go back to the previous slide, wrapping to the last
    pub fn previous(&mut self) -> usize {
        self.current = if self.current == 0 {
            self.slides.len() - 1
        } else {
            self.current - 1
        };
        self.current
    }

    /// Jump to a slide by index; out-of-range selections are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current = index;
        }
    }

    /// Toggle automatic playback, returning the new state
    pub fn toggle_playback(&mut self) -> bool {
        self.playing = !self.playing;
        debug!("Slideshow playback: {}", self.playing);
        self.playing
    }
}

impl Default for Slideshow {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-backed player driving a shared slideshow while playback is on
///
/// While running, the player advances the slideshow every
/// [`ADVANCE_INTERVAL`] and emits the new index on its event channel. `stop`
/// raises a flag the thread observes on its next wakeup; dropping the handle
/// without `stop` leaves the thread running for the process lifetime, which
/// matches a page-lifetime timer.
pub struct SlideshowPlayer {
    slideshow: Arc<Mutex<Slideshow>>,
    event_sender: mpsc::SyncSender<SlideEvent>,
    interval: Duration,
    running: Arc<AtomicBool>,
}

impl SlideshowPlayer {
    /// Create a player over a shared slideshow
    pub fn new(
        slideshow: Arc<Mutex<Slideshow>>,
        event_sender: mpsc::SyncSender<SlideEvent>,
    ) -> Self {
        Self::with_interval(slideshow, event_sender, ADVANCE_INTERVAL)
    }

    /// Create a player with an explicit advance interval (used by tests)
    pub fn with_interval(
        slideshow: Arc<Mutex<Slideshow>>,
        event_sender: mpsc::SyncSender<SlideEvent>,
        interval: Duration,
    ) -> Self {
        Self {
            slideshow,
            event_sender,
            interval,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle for stopping the player from another thread
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Start the player thread
    ///
    /// Marks the shared slideshow as playing and advances it on each tick
    /// until stopped. Ticks while the slideshow has playback toggled off are
    /// skipped, so pausing does not require tearing the thread down.
    pub fn start(self) -> JoinHandle<()> {
        self.running.store(true, Ordering::SeqCst);
        self.slideshow.lock().playing = true;
        info!("Slideshow player started");

        thread::spawn(move || {
            while self.running.load(Ordering::SeqCst) {
                thread::sleep(self.interval);
                if !self.running.load(Ordering::SeqCst) {
                    break;
                }

                let index = {
                    let mut slideshow = self.slideshow.lock();
                    if !slideshow.is_playing() {
                        continue;
                    }
                    slideshow.next()
                };

                // A full or disconnected consumer must not stall the timer
                if self.event_sender.try_send(SlideEvent::Advanced(index)).is_err() {
                    debug!("Slide event dropped");
                }
            }
            info!("Slideshow player stopped");
        })
    }

    /// Request the player thread to stop after its current tick
    pub fn stop(running: &AtomicBool) {
        running.store(false, Ordering::SeqCst);
    }
}
