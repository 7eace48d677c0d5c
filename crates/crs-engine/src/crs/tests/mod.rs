mod additional;
mod common;
