/// UI module exports
pub mod board_state;
pub mod components;
pub mod messages;
pub mod popup;
