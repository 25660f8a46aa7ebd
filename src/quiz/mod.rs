//! Question generation: category choice, quote pick, distractor sampling.

mod builder;
mod picker;
mod sampler;
mod selector;

pub use builder::{BuildError, build_question};
pub use picker::pick_quote;
pub use sampler::sample_distractors;
pub use selector::{POLITICS_PROBABILITY, choose_category};

/// Options shown per question: the correct id plus three distractors.
pub const NUM_OPTIONS: usize = 4;
