// Exhaustive search for the maximum non-attacking princesses problem
pub mod board;
pub mod solver;
