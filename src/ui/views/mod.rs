pub mod create;
pub mod quiz;
pub mod results;
