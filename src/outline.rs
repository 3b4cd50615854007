//! Main module for folder-tree library functionality

pub mod building;
pub mod config;
pub mod error;
pub mod formats;
pub mod helper;
pub mod parsing;
