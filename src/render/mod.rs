pub mod comment;
pub mod context;
pub mod diff;
pub mod format;
pub mod plan;
pub mod skeleton;

pub use context::build_context;
pub use format::{select_formatter, Formatter, Rustfmt, Verbatim};
pub use plan::{
    execute_plan, plan_render, FileAction, GeneratedProject, GenerationPlan, PlannedFile,
    WriteMode, LICENSE_FILE, MAIN_FILE,
};
