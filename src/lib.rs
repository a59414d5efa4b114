pub mod catalog;
pub mod core;
pub mod gui;
pub mod matcher;
pub mod persistence;
pub mod profile;
pub mod wizard;
