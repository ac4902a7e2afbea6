//! Typed check façades.
//!
//! A façade binds a [`Validator`](crate::Validator), a field name and a
//! value. Each check method evaluates one condition, records an error on
//! failure, and returns the façade so checks chain. A failing check never
//! stops the chain.
//!
//! ```rust
//! use fieldcheck::Validator;
//!
//! let mut v = Validator::new();
//! v.string("email", "").required().email();
//! v.int("age", 15).min(18);
//! assert_eq!(v.error_count(), 3);
//! ```

mod number;
mod slice;
mod string;
mod time;

pub use number::{Float, FloatCheck, IntCheck, Integer, Number, NumberCheck, UintCheck};
pub use slice::SliceCheck;
pub use string::StringCheck;
pub use time::TimeCheck;
