//! MusicBrainz API integration
//!
//! Looks up releases by MusicBrainz ID to get the authoritative title,
//! artist credit and track listing.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod adapter;
mod client;

pub use client::MusicBrainzClient;
