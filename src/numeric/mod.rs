// ============================================================================
// Numeric Module
// Decimal plumbing shared by every monetary operation
// ============================================================================
//
// This module provides:
// - MoneyError: Error types for construction, arithmetic and the toolkit
// - Operand/Term: The closed set of inputs accepted at the public boundary
// - WorkingPrecision: Per-call precision context for normalize/quantize
//
// Design principles:
// - No floating-point arithmetic (floats are converted through their text form)
// - All arithmetic returns Result (no panics)
// - Precision is a value passed into each computation, never global state
// - Round-half-to-even is the single rounding policy

mod errors;
mod operand;
mod precision;

pub use errors::{ErrorKind, MoneyError, MoneyResult};
pub use operand::{Operand, Term};
pub use precision::{
    checked_pow, minor_unit_scale, significant_digits, WorkingPrecision, MAX_PRECISION, ROUNDING,
};
