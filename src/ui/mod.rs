//! Terminal front end.
//!
//! The Book screen holds the booking and cancellation forms; the Admin
//! screen holds the add-bus form. Both show the shared bus list.

pub mod app;
pub mod bus_list;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod removal;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
