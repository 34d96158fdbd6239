//! Filter expressions for contact row queries
//!
//! This crate provides:
//! - [`Value`]: scalar cells and literals with safe quoting
//! - [`Operator`]: the comparison operators of the filter language
//! - [`Where`]: an immutable, composable boolean expression
//! - in-process evaluation of expressions for in-memory row sources
//!
//! # Example
//!
//! ```
//! use contacts_where::Where;
//!
//! let filter = Where::equal_to("mimetype", "vnd.android.cursor.item/phone_v2")
//!     .and(Where::starts_with("data1", "+1"));
//!
//! assert_eq!(
//!     filter.render(),
//!     "( mimetype='vnd.android.cursor.item/phone_v2' AND data1 LIKE '+1%' )"
//! );
//! ```

mod error;
mod eval;
mod expression;
mod operator;
mod value;

pub use error::*;
pub use eval::*;
pub use expression::*;
pub use operator::*;
pub use value::*;
