pub mod figure;
pub mod generator;
pub mod histogram;
pub mod runner;
