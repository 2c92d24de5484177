//! Declarative entrance animations and the small timed effects on the page.
//!
//! Everything here is plain data; the view layer turns it into inline styles
//! and drives the tickers from browser intervals.

use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);

/// Distance from the top of the viewport that in-page jumps leave clear for
/// the fixed navbar.
pub const HEADER_OFFSET: f64 = 80.0;

/// Page CSS for visitors without scripts. Server-rendered sections start in
/// their hidden state and nothing would ever reveal them, so any element
/// whose inline style begins hidden is shown outright.
pub const NO_SCRIPT_FALLBACK: &str =
    r#"[style^="opacity: 0;"] { opacity: 1 !important; transform: none !important; }"#;

/// Where an element starts before it is revealed. It always ends in place
/// and fully opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entrance {
    Rise(f64),
    Drop(f64),
    SlideFromLeft(f64),
    SlideFromRight(f64),
    Zoom(f64),
    Fade,
}

impl Entrance {
    fn hidden_transform(self) -> String {
        match self {
            Entrance::Rise(px) => format!("translateY({px}px)"),
            Entrance::Drop(px) => format!("translateY(-{px}px)"),
            Entrance::SlideFromLeft(px) => format!("translateX(-{px}px)"),
            Entrance::SlideFromRight(px) => format!("translateX({px}px)"),
            Entrance::Zoom(scale) => format!("scale({scale})"),
            Entrance::Fade => "none".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub entrance: Entrance,
    pub duration: Duration,
    pub delay: Duration,
}

impl Motion {
    pub fn new(entrance: Entrance) -> Self {
        Self {
            entrance,
            duration: DEFAULT_DURATION,
            delay: Duration::ZERO,
        }
    }

    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }

    /// Card grids: the `index`th card waits `base + step * index`.
    pub fn staggered(entrance: Entrance, base_ms: u64, step_ms: u64, index: usize) -> Self {
        Self::new(entrance).delay_ms(base_ms + step_ms * index as u64)
    }

    /// Inline style for the element in its current state.
    pub fn style(&self, revealed: bool) -> String {
        let (opacity, transform) = if revealed {
            ("1".to_string(), "none".to_string())
        } else {
            ("0".to_string(), self.entrance.hidden_transform())
        };
        let duration = self.duration.as_secs_f64();
        let delay = self.delay.as_secs_f64();
        format!(
            "opacity: {opacity}; transform: {transform}; transition: opacity {duration}s ease-out {delay}s, transform {duration}s ease-out {delay}s;"
        )
    }
}

/// Reveals `text` one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: &'static str,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self { text, shown: 0 }
    }

    pub fn visible(&self) -> &'static str {
        &self.text[..self.shown]
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.text.len()
    }

    /// Shows one more character. Returns `false` once there is nothing left,
    /// which is the caller's cue to stop its interval.
    pub fn tick(&mut self) -> bool {
        match self.text[self.shown..].chars().next() {
            Some(c) => {
                self.shown += c.len_utf8();
                true
            }
            None => false,
        }
    }
}

/// Counts up to `target` in fixed steps, never overshooting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    value: u32,
    target: u32,
    step: u32,
}

impl CountUp {
    pub fn new(target: u32, step: u32) -> Self {
        Self {
            value: 0,
            target,
            step: step.max(1),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_done(&self) -> bool {
        self.value >= self.target
    }

    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.value = self.value.saturating_add(self.step).min(self.target);
        true
    }
}

/// Absolute scroll position that puts an element just under the navbar.
/// `element_top` is relative to the viewport, `page_offset` is the current
/// vertical scroll.
pub fn scroll_target(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    (element_top + page_offset - header_offset).max(0.0)
}
