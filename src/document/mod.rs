//! Document module - invoice/memo snapshots, money arithmetic, numbering
//! and the REST handlers that expose them.

pub mod handlers;
pub mod models;
pub mod money;
pub mod numbering;
pub mod validation;

pub use models::{Document, DocumentKind, LineItem, Totals};
pub use numbering::next_number;
pub use validation::{ValidationError, ValidationErrors, Validator};
