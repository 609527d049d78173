#![deny(clippy::all)]

pub mod cli;
pub mod config;
pub mod constant;
pub mod form;
pub mod view;
