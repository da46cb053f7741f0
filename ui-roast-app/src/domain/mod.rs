mod artifact;
mod form;
mod roast;
mod selection;

pub use artifact::{Artifact, InputModality, UnknownModality};
pub use form::{FormState, RoastForm, SUBMIT_ERROR_MESSAGE};
pub use roast::{Roast, RoastPrompt, RoastRequest, DEFAULT_JUDGE};
pub use selection::{Category, Judge, Selection};
