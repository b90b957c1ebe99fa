pub mod orchestration;

pub use orchestration::{resolve_with_config, run_resolve, Rendering, ResolveArgs, ResolveOutcome};
