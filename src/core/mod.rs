pub mod client;
pub mod generator;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod prompt;
pub mod safety;
pub mod seed;
pub mod style;
