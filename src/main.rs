mod analyzer;
mod app;
mod components;
mod config;
mod controller;
mod error;
mod message;
mod model;
mod upload;
mod utils;
mod views;

fn main() -> anyhow::Result<()> {
    app::run()
}
