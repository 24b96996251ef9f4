//! Input module - translation of requested headings into effective ones

mod handler;

pub use handler::translate;
