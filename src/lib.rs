//! Rhetor is an abstract argumentation extension and ranking engine.

#![warn(missing_docs)]

pub mod aa;

pub mod encodings;

pub mod io;

pub mod rankings;

pub mod sat;

pub mod solvers;

pub mod utils;
