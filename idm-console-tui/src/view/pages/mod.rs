//! 各页面视图

pub mod entities;
pub mod home;
pub mod settings;
