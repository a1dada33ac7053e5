//! Model scoring and the concept quiz

pub mod complexity;
pub mod quiz;

pub use complexity::{complexity_score, rate, ComplexityRating, ComplexityReport};
pub use quiz::{check, Question, QuizVerdict, QUESTIONS};
