//! 各页面视图

pub mod components;
pub mod home;
pub mod maturity;
pub mod podcast;
pub mod reference;
pub mod stack;
pub mod tools;
