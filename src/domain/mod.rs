// ============================================================================
// Domain Models Module
// Currency descriptors, the money value type and its export records
// ============================================================================

pub mod currencies;
pub mod currency;
pub mod money;
pub mod record;

pub use currencies::{CLP, EUR, GBP, JPY, USD};
pub use currency::Currency;
pub use money::Money;
pub use record::{MoneyRecord, StorageRecord};
