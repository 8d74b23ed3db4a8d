mod command;
mod query;
mod tracing_ctx;

pub use self::command::ProductCommandService;
pub use self::query::ProductQueryService;
