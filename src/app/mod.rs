// Application layer: glue between the CLI options and the exercise modules.

pub mod commands;
