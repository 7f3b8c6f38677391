//! Power Evaluation Examples
//!
//! This example demonstrates the power kernel's behavior across its
//! decision branches:
//! - Exact integer exponents (positive and negative)
//! - Fractional exponents via the series path
//! - Special cases and sentinel outcomes
//! - Custom precision configuration
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use powser::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), PowserError> {
    println!("{}", "=".repeat(60));
    println!("powser - Power Evaluation Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_integer_exponents()?;
    example_2_fractional_exponents()?;
    example_3_special_cases()?;
    example_4_custom_precision()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Integer Exponents
/// Exact repeated multiplication, sign-correct for negative bases
fn example_1_integer_exponents() -> Result<(), PowserError> {
    println!("Example 1: Integer Exponents");
    println!("{}", "-".repeat(60));

    let model = Powser::new().build()?;

    println!("  2^10   = {}", model.power(2.0, 10.0)?);
    println!("  2^-10  = {}", model.power(2.0, -10.0)?);
    println!("  (-3)^3 = {}", model.power(-3.0, 3.0)?);
    println!("  (-3)^2 = {}", model.power(-3.0, 2.0)?);

    /* Expected Output:
      2^10   = 1024
      2^-10  = 0.0009765625
      (-3)^3 = -27
      (-3)^2 = 9
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Fractional Exponents
/// The general path: exp(y * ln(|x|)) from the series primitives
fn example_2_fractional_exponents() -> Result<(), PowserError> {
    println!("Example 2: Fractional Exponents");
    println!("{}", "-".repeat(60));

    let model = Powser::new().build()?;

    println!("  4^0.5    = {:.6}", model.power(4.0, 0.5)?);
    println!("  16^-0.5  = {:.6}", model.power(16.0, -0.5)?);
    println!("  2^0.1    = {:.12}", model.power(2.0, 0.1)?);

    /* Expected Output:
      4^0.5    = 2.000000
      16^-0.5  = 0.250000
      2^0.1    = 1.071773462536
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Special Cases and Sentinels
/// Zero bases and negative bases with fractional exponents
fn example_3_special_cases() -> Result<(), PowserError> {
    println!("Example 3: Special Cases and Sentinels");
    println!("{}", "-".repeat(60));

    let model = Powser::new().build()?;

    println!("  0^0       = {}", model.power(0.0, 0.0)?);
    println!("  0^5       = {}", model.power(0.0, 5.0)?);
    println!("  0^-5      = {}", model.power(0.0, -5.0)?);
    println!("  (-4)^0.5  = {}", model.power(-4.0, 0.5)?);

    /* Expected Output:
      0^0       = 1
      0^5       = 0
      0^-5      = inf
      (-4)^0.5  = NaN
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Custom Precision
/// Trading accuracy for iteration count through the builder
fn example_4_custom_precision() -> Result<(), PowserError> {
    println!("Example 4: Custom Precision");
    println!("{}", "-".repeat(60));

    let loose = Powser::new().tolerance(1e-4).build()?;
    let tight = Powser::new().tolerance(1e-15).build()?;

    println!("  4^0.5 (tolerance 1e-4)  = {:.5}", loose.power(4.0, 0.5)?);
    println!("  4^0.5 (tolerance 1e-15) = {:.5}", tight.power(4.0, 0.5)?);

    // A cap too tight for convergence is reported, not silently wrong.
    let capped = Powser::new().max_terms(5).build()?;
    match capped.power(10.0, 0.5) {
        Err(PowserError::TermLimit { terms }) => {
            println!("  10^0.5 with max_terms(5): stopped after {terms} terms");
        }
        other => println!("  unexpected: {other:?}"),
    }

    /* Expected Output:
      4^0.5 (tolerance 1e-4)  = 1.99999
      4^0.5 (tolerance 1e-15) = 2.00000
      10^0.5 with max_terms(5): stopped after 5 terms
    */

    println!();
    Ok(())
}
