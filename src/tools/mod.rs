// ============================================================================
// Tools Module
// Stateless financial calculations over Money
// ============================================================================

pub mod financial;

pub use financial::{
    calculate_compound_interest, calculate_markup, calculate_percentage,
    calculate_simple_interest, calculate_vat,
};
