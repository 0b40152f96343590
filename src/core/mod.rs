pub mod engine;
pub mod matrix;
pub mod memory;
pub mod primes;
