mod assistant;
mod build_config;
mod guide;
mod manifest;
mod stylesheet;
mod utility;

pub use assistant::generate_assistant_guide;
pub use build_config::generate_build_config;
pub use guide::generate_setup_guide;
pub use manifest::generate_manifest;
pub use stylesheet::generate_stylesheet;
pub use utility::generate_utility_module;
