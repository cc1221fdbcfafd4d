//! Tardigrade, a settler bot for Halite II.
//!
//! Every undocked ship picks a planet at random, weighted towards planets
//! that are close and large, and keeps flying to it until it can no longer
//! do anything there. `hlt` talks to the game engine; the rest is strategy.

pub mod agent;
pub mod config;
pub mod hlt;
pub mod memory;
pub mod planner;
pub mod scoring;
pub mod targeting;
