mod section;
mod tracker;

pub use section::{ActiveSection, SectionGeometry, SectionId, compute_active_section};
pub use tracker::{ScrollTracker, SectionChange};
