//! Spring XML configuration generator for gridcfg.
//!
//! Renders a [`ClusterConfig`](gridcfg_model::ClusterConfig) as a Spring
//! `<beans>` document holding the data source beans and the grid
//! configuration bean.
//!
//! ```ignore
//! use gridcfg_codegen::{ConfigCodegen, GenerateOptions};
//! use gridcfg_model::ClusterConfig;
//! use gridcfg_xml::Generator;
//!
//! let config = ClusterConfig::from_file("cluster.toml")?;
//! let generator = Generator::new(&config, GenerateOptions::default());
//! let xml = generator.render()?;
//! ```

mod escape;
mod generator;

pub use escape::escape_xml;
pub use generator::{FILE_NAME, Generator};
pub use gridcfg_codegen::language::{ConfigCodegen, PreviewFile};
