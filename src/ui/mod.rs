mod chrome;
mod layout;
mod overlay;
mod page;

pub use chrome::{
    NavLink, NavTarget, NavbarView, StatusView, draw_navbar, draw_status, link_at, navbar_links,
};
pub use layout::{UiLayout, split_layout};
pub use overlay::{
    draw_contact_overlay, draw_cursor, draw_prompt_overlay, draw_transition_overlay,
};
pub use page::draw_page;
