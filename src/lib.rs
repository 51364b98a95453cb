//! Notes: a terminal note keeper with a minimal full-screen line editor.

pub mod commands;
pub mod core;
pub mod tui;

#[cfg(test)]
mod test_support;
