// Provider registry module.

pub mod registry;

pub use registry::{get_oauth1_spec, get_provider_spec, OAUTH1_PROVIDER_IDS, PROVIDER_IDS};
