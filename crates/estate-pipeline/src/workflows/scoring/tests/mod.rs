mod common;
mod engine;
mod returns;
