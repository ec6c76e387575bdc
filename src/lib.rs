pub mod app;
pub mod command;
pub mod config;
pub mod contact;
pub mod content;
pub mod cursor;
pub mod error;
pub mod event;
pub mod input;
pub mod logging;
pub mod nav;
pub mod page;
pub mod route;
pub mod scroll;
pub mod transition;
pub mod ui;
