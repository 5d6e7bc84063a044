//! Stamps the current geographic location into Markdown note front matter.
//!
//! The core is three seams: a [`position::PositionSource`] for the sensing
//! capability, a [`geocode::ReverseGeocoder`] for coordinates-to-address
//! lookups, and a [`frontmatter::FrontmatterStore`] for the note itself.
//! [`app::App`] wires them to the persisted [`settings::Settings`].

pub mod app;
pub mod cli;
pub mod client;
pub mod frontmatter;
pub mod geocode;
pub mod logging;
pub mod position;
pub mod prelude;
pub mod settings;
