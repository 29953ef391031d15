pub mod day1;
pub mod day2;
