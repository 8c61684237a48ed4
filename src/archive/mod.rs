//! Extension archive access (locating the `.vsix` and reading its entries)

pub mod locate;
pub mod reader;

pub use locate::find_single_archive;
pub use reader::ExtensionArchive;
