pub mod columns;
pub mod duration;
pub mod engine;
pub mod report;
pub mod rules;
