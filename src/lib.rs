pub mod error;
pub mod config;
pub mod logging;
pub mod atomic;
pub mod tokenize;
pub mod records;
pub mod archaisms;
pub mod extract;
pub mod modernity;
pub mod report;
pub mod splitter;
pub mod classifier;
pub mod updater;
