//! Background jobs driving the periodic broadcasters.

pub mod broadcast;
