//! Exact rational numbers kept in lowest terms.
//!
//! [`Fraction`] can be built from an integer pair, a single integer, `"N/D"` text, or a float,
//! and always renders back as `"n/d"` in reduced form.
//!
//! ```
//! use ratiokit::{frac, Fraction};
//!
//! let mut f: Fraction = "30/40".parse().unwrap();
//! assert_eq!(f.to_string(), "3/4");
//!
//! f.add_in_place("7/8").unwrap();
//! assert_eq!(f, frac!(13 / 8));
//! assert!(f.is_improper());
//! ```

mod decimal;
pub mod fract;
pub mod parsing;

pub use fract::{BaseInt, Fraction, FractionError, IntoFraction};
pub use parsing::ParsePolicy;
