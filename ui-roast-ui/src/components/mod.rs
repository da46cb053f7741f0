mod artifact_input;
mod judge_selector;

pub use artifact_input::ArtifactInput;
pub use judge_selector::JudgeSelector;
