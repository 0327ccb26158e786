//! HTTP relay server

pub mod api;
