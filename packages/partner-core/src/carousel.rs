//! Hero carousel state.
//!
//! The carousel always holds at least one slide, so `index` is always valid.
//! Every change to `index` or to the slide list bumps [`Carousel::epoch`];
//! the autoplay task is keyed by that epoch and restarted whenever it moves.

use tracing::debug;

use crate::error::{PortalError, Result};
use crate::hero::{default_slides, HeroConfig, HeroText, Slide};

/// Outcome of one autoplay tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Advanced,
    /// Pointer is over the carousel; the index stays put
    Paused,
    /// The tick belongs to an autoplay task that has been superseded
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slides: Vec<Slide>,
    index: usize,
    text: HeroText,
    hovered: bool,
    epoch: u64,
}

impl Default for Carousel {
    fn default() -> Self {
        Self {
            slides: default_slides(),
            index: 0,
            text: HeroText::default(),
            hovered: false,
            epoch: 0,
        }
    }
}

impl Carousel {
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &HeroText {
        &self.text
    }

    /// Identity of the current (index, slides) state
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Slide to warm the image cache with
    pub fn preload_target(&self) -> &Slide {
        &self.slides[(self.index + 1) % self.slides.len()]
    }

    pub fn next(&mut self) {
        self.set_index((self.index + 1) % self.slides.len());
    }

    pub fn prev(&mut self) {
        let len = self.slides.len();
        self.set_index((self.index + len - 1) % len);
    }

    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.slides.len() {
            return Err(PortalError::SlideOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.set_index(index);
        Ok(())
    }

    /// Pointer entered (`true`) or left (`false`) the carousel
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Autoplay tick from the task started at `epoch`
    pub fn tick(&mut self, epoch: u64) -> Tick {
        if epoch != self.epoch {
            return Tick::Stale;
        }
        if self.hovered {
            return Tick::Paused;
        }
        self.next();
        Tick::Advanced
    }

    /// Apply a remote config.
    ///
    /// Slides are replaced wholesale and the index clamped; text fields are
    /// merged over the current values.
    pub fn apply_config(&mut self, config: HeroConfig) {
        let slides_replaced = match config.images.filter(|slides| !slides.is_empty()) {
            Some(slides) => {
                self.index = self.index.min(slides.len() - 1);
                self.slides = slides;
                self.epoch += 1;
                true
            }
            None => false,
        };

        let text_merged = config.text.is_some();
        if let Some(patch) = config.text {
            self.text.merge(patch);
        }

        debug!(
            slides = self.slides.len(),
            slides_replaced,
            text_merged,
            "Hero config applied"
        );
    }

    fn set_index(&mut self, index: usize) {
        if index != self.index {
            self.index = index;
            self.epoch += 1;
        }
    }
}
