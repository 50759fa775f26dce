//! Metro ticketing server.
//!
//! Answers two questions for a rider: "what is the cheapest route between
//! two stations?" and "what did I pay for past trips?"

pub mod config;
pub mod domain;
pub mod ledger;
pub mod metro;
pub mod network;
pub mod planner;
pub mod web;
