pub mod errors;
pub mod model;
pub mod pattern;
pub mod resolver;
pub mod table;

pub use errors::TableError;
pub use model::{Resolution, ResolvedVariable};
pub use pattern::Pattern;
pub use resolver::{header_short_name, Resolver};
pub use table::{builtin_table, PatternEntry, PatternTable};
