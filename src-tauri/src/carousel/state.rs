use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CarouselStatus {
    Rotating,
    Paused,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CarouselState {
    pub id: String,
    pub slide: usize,
    pub slide_count: usize,
    pub status: CarouselStatus,
    pub interval_ms: u64,
    /// Number of timer-driven advances since start.
    pub rotations: u64,
}

impl CarouselState {
    pub fn new(id: impl Into<String>, slide_count: usize, interval_ms: u64) -> Self {
        Self {
            id: id.into(),
            slide: 0,
            slide_count,
            status: CarouselStatus::Rotating,
            interval_ms,
            rotations: 0,
        }
    }

    pub fn is_rotating(&self) -> bool {
        self.status == CarouselStatus::Rotating
    }

    /// Move to the next slide, wrapping after the last one. Returns whether
    /// the slide changed; paused or empty carousels stay put.
    pub fn advance(&mut self) -> bool {
        if !self.is_rotating() || self.slide_count == 0 {
            return false;
        }
        self.slide = (self.slide + 1) % self.slide_count;
        self.rotations = self.rotations.wrapping_add(1);
        true
    }

    pub fn select(&mut self, slide: usize) -> Result<()> {
        if slide >= self.slide_count {
            bail!(
                "slide {slide} out of range for carousel '{}' with {} slides",
                self.id,
                self.slide_count
            );
        }
        self.slide = slide;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.status = CarouselStatus::Paused;
    }

    pub fn resume(&mut self) {
        self.status = CarouselStatus::Rotating;
    }
}
