pub mod adapters;
pub mod config;
pub mod controllers;
pub mod models;
pub mod ports;
