pub mod crossover;
pub mod initialization;
pub mod mutation;
pub mod runner;
pub mod selection;
pub mod template;

// Re-export specific structs for easier access
pub use self::runner::{
    OptimizationOptions, OptimizationResult, Optimizer, ProgressCallback, SilentProgress,
};
pub use self::template::LayoutTemplate;
