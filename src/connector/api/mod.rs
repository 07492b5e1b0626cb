pub mod client;

pub use client::NeoClient;
