pub mod barrier_model;
pub mod config;
pub mod controls;
pub mod error;
pub mod grid;
pub mod media;
pub mod output;
pub mod potentials;
pub mod scenes;
pub mod wave_packet;
