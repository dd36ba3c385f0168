//! Workout store HTTP client.
//!
//! The store owns the data; this crate only reads the workout list.

pub mod client;

pub use client::WorkoutStoreClient;
