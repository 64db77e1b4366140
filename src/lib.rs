//! Core simulation for the fireball duel: entity data, tunables and the pure
//! per-tick update.  The terminal frontend lives in the binary.

pub mod compute;
pub mod config;
pub mod entities;
