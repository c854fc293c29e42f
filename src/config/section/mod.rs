//! Configuration section definitions.

mod generate;
mod serve;
mod site;
mod variant;

pub use generate::GenerateConfig;
pub use serve::ServeConfig;
pub use site::SiteConfig;
pub use variant::VariantConfig;
