pub mod diagnose;
pub mod rules;
pub mod run;
