#![deny(clippy::all)]

mod client;
mod common;
pub mod generate;

pub use client::Client;
use common::*;
pub use common::error::GenerationFailed;
pub use common::genre::Genre;
pub use generate::SongResult;
