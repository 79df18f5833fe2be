pub mod app;

pub use app::error::{CallbackHook, GenerateError};
pub use app::generator::{build_tree, generate};
pub use app::models::{Callbacks, GeneratorConfig, NamingMode, NamingStrategy, StaticNaming};
pub use app::tree::{AssetGroup, AssetNode};
