// Engine module - link parsing, search and paging
// This layer sits between the raw links file and the hub state in linkhub-runtime

pub mod builder;
pub mod csv_loader;
pub mod error;
pub mod filter;
pub mod paginate;

pub use builder::{ParseResult, ParsedRow, RowWarning, build_link, build_links, parse_links};
pub use csv_loader::{RawRow, parse_rows};
pub use error::{Error, Result};
pub use filter::{filter_links, matches};
pub use paginate::{DEFAULT_PAGE_SIZE, Page, PageInfo, paginate, total_pages};
