/// Core module for snake_case checking
///
/// This module contains the snake_case pattern, the camelCase conversion rule
/// and the checker that applies them to files.

pub mod checker;
pub mod patterns;
