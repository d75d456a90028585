pub mod calendar;
pub mod cost;
pub mod day;
pub mod plan;
pub mod probability;
pub mod scorer;
pub mod weights;
