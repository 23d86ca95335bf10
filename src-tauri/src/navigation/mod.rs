pub mod context;
pub mod screen;
pub mod stage;

pub use context::{ContextKind, Navigation, SearchContext};
pub use screen::Screen;
pub use stage::Stage;
