mod bootstrap;
mod gameplay;
mod loop_runner;
mod tuning;

pub(crate) use loop_runner::run;
