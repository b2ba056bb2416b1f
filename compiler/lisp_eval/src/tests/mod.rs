//! Whole-pipeline evaluator tests: source is lexed and parsed first.
