//! Output formatting for match reports

pub mod formatter;
