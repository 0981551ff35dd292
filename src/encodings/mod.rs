//! Propositional encodings of AF labelings, used by the SAT-backed solvers.

mod complete_labeling_encoder;
pub use complete_labeling_encoder::CompleteLabelingEncoder;

mod stable_labeling_encoder;
pub use stable_labeling_encoder::StableLabelingEncoder;

mod specs;
pub use specs::ConstraintsEncoder;

#[cfg(test)]
pub(crate) mod test_utils;
