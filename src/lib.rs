pub mod convert;
pub mod error;
pub mod layout;
pub mod table;
pub mod ucode;

pub use convert::convert;
pub use error::ConvertError;
pub use layout::Layout;
pub use table::Table;
pub use ucode::{Microword, Ucode};
