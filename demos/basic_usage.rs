// ============================================================================
// Basic Usage Example
// ============================================================================

use monetary::prelude::*;
use monetary::utils::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing("monetary=debug")?;

    println!("=== Monetary Example ===\n");

    // The same ten and a half dollars, three ways
    let major = Money::from_major("10.50", USD)?;
    let minor = Money::from_minor(1050, USD)?;
    let fractional = Money::from_fractional_minor(1050.4, USD)?;
    println!("major:      {}", major.format(true, true));
    println!("minor:      {}", minor.format(true, true));
    println!("fractional: {} (stored as {})", fractional.format(true, true), fractional.amount());
    println!("all equal:  {}\n", major.equals_to(&minor)? && major.equals_to(&fractional)?);

    // Arithmetic keeps full precision until formatting
    let unit_price = Money::from_major("2.32", USD)?;
    let revenue = unit_price.multiply(3)?;
    let per_day = revenue.divide(7)?;
    println!("revenue:    {}", revenue.format(true, false));
    println!("per day:    {} (unrounded {})\n", per_day.format(true, false), per_day.amount());

    // Running total seeded at zero
    let basket = [
        Term::from(0),
        Term::from(Money::from_major("19.99", EUR)?),
        Term::from(Money::from_minor(450, EUR)?),
        Term::from("0.51"),
    ];
    if let Some(total) = Money::sum(basket)? {
        println!("basket:     {}", total.format(true, true));
    }

    // Currency guard
    match major.add(Money::from_major(1, EUR)?) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("guarded:    {err}\n"),
    }

    // Toolkit
    let principal = Money::from_major(1000, USD)?;
    println!("vat 7.25%:        {}", calculate_vat(&Money::from_major(100, USD)?, 7.25)?);
    println!("15% of 1000:      {}", calculate_percentage(&principal, 15)?);
    println!("simple 5% x2:     {}", calculate_simple_interest(&principal, 5, 2)?);
    println!("compound 5% 10y:  {}", calculate_compound_interest(&principal, 5.0, 10, 12)?);
    println!("markup 15%:       {}\n", calculate_markup(&principal, 15)?);

    // Export
    println!("record:  {:?}", principal.to_record(true));
    println!("json:    {}", principal.to_json(false)?);
    println!("storage: {}", principal.to_storage_json()?);

    Ok(())
}
