mod generate_roast;
mod roast_generator;

pub use generate_roast::{GenerateRoast, RoastBackend, DEMO_ROAST, NO_ROAST_PLACEHOLDER};
pub use roast_generator::RoastGenerator;
