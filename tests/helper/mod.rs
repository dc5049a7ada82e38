//! Shared test utilities

mod asdf;
mod logs;

pub use asdf::FakeAsdf;
pub use logs::count_errors;
