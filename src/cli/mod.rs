//! Command implementations and terminal rendering.

pub mod catalog;
pub mod cities;
pub mod faq;
pub mod quote;
pub mod setup;
pub mod ui;
