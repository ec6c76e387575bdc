mod location;
mod resolver;
mod router;

pub use location::Location;
pub use resolver::{
    FALLBACK_PAGE_NAME, FALLBACK_PROJECT_NAME, PageName, Route, WORK_DETAIL_PREFIX,
    resolve_page_name,
};
pub use router::{HISTORY_CAPACITY, Router};
