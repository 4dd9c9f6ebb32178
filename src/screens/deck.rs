use bevy::prelude::*;
use thiserror::Error;

/// One entry of the deck shown on the device screens.
#[derive(Debug, Clone)]
pub struct Slide {
    pub name: String,
    pub tint: Color,
    pub image: Option<Handle<Image>>,
}

#[derive(Debug, Error, PartialEq)]
pub enum AdvanceRejected {
    #[error("cooldown active for another {remaining:.2}s")]
    Cooldown { remaining: f32 },
    #[error("deck is empty")]
    Empty,
}

/// Ordered screens cycled by clicking a device screen, debounced by a cooldown.
#[derive(Resource, Debug)]
pub struct ScreenDeck {
    slides: Vec<Slide>,
    index: usize,
    cooldown: f32,
    last_accepted: Option<f32>,
}

impl ScreenDeck {
    pub fn new(slides: Vec<Slide>, cooldown: f32) -> Self {
        Self {
            slides,
            index: 0,
            cooldown,
            last_accepted: None,
        }
    }

    /// Moves to the next slide at time `now` (seconds), wrapping around.
    pub fn advance(&mut self, now: f32) -> Result<usize, AdvanceRejected> {
        if let Some(last) = self.last_accepted {
            let elapsed = now - last;
            if elapsed < self.cooldown {
                return Err(AdvanceRejected::Cooldown {
                    remaining: self.cooldown - elapsed,
                });
            }
        }
        if self.slides.is_empty() {
            return Err(AdvanceRejected::Empty);
        }

        self.last_accepted = Some(now);
        self.index = (self.index + 1) % self.slides.len();
        Ok(self.index)
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    pub fn current_name(&self) -> String {
        match self.current() {
            Some(slide) if !slide.name.is_empty() => slide.name.clone(),
            _ => format!("Screen {}", self.index + 1),
        }
    }
}

/// Countdown for the click feedback tint on the screens.
#[derive(Resource, Debug, Default)]
pub struct ScreenFlash {
    pub remaining: f32,
}

impl ScreenFlash {
    pub fn trigger(&mut self, duration: f32) {
        self.remaining = duration;
    }

    /// Returns true on the tick the flash ends.
    pub fn tick(&mut self, delta_secs: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining -= delta_secs;
        self.remaining <= 0.0
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}
