//! Finds the longest single-color train route of a _Ticket To Ride_ route network.

pub mod city;
pub mod config;
pub mod error;
pub mod explorer;
pub mod map;
pub mod record;
pub mod report;
pub mod state;
pub mod train_color;

#[macro_use]
extern crate smallvec;
