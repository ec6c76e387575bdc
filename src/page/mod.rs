mod model;
mod wrap;

pub use model::{LineKind, PageLayout, PageLine, PageModel};
pub use wrap::{truncate_to_width, wrap_text};
