//! CLI commands for roadmap

pub mod add;
pub mod dispatch;
pub mod new;
pub mod paths;
pub mod shortest;
pub mod show;
