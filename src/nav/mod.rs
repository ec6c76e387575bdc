mod navigator;
mod session;

pub use navigator::{Navigator, PageHost};
pub use session::{NavSignal, NavigationSession};
