//! TUI rendering: the form card and the result screen

pub mod form_ui;
pub mod result_ui;
