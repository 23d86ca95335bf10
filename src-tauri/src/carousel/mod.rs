#[cfg(feature = "desktop")]
pub(crate) mod commands;
pub mod controller;
pub mod state;

pub use controller::{
    CarouselController, CarouselEmitter, CAROUSEL_ADVANCED_EVENT, CAROUSEL_STATE_CHANGED_EVENT,
};
pub use state::{CarouselState, CarouselStatus};
