//! Influss
//!
//! 稍后阅读剪藏工具：命令行与浏览器 native messaging host

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod host;

pub use bootstrap::run;
