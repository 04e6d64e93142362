pub mod calculator;
pub mod logic;
pub mod matrix;
pub mod policy;
