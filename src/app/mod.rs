pub mod exercises;
