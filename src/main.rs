//! Walks through the fraction API and prints what each call produces.
use anyhow::{bail, Result};
use ratiokit::{frac, Fraction, ParsePolicy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    let f1 = Fraction::new(5, 10)?;
    println!("f1: {f1}");
    println!("f2: {}", Fraction::from_integer(3));

    let mut f3: Fraction = "30/40".parse()?;
    println!("f3: {f3}");
    println!("f4: {}", Fraction::from_float(0.345)?);
    println!("f5: {}", Fraction::from_float(0.4)?);

    println!("f1 + 2: {}", f1.add_integer(2));
    println!("f1 + 0.5: {}", f1.try_add(0.5)?);
    println!("f1 + 0.2862: {}", f1.try_add(0.2862)?);

    f3.add_in_place("7/8")?;
    println!("f3 after adding 7/8: {f3}");
    f3.add_in_place(6.45)?;
    println!("f3 after adding 6.45: {f3}");

    let (f12, f13, f14, f15) = (
        frac!(1 / 5),
        frac!(1 / 3),
        frac!(125 / 375),
        frac!(15 / 75),
    );
    println!("{f12} == {f14}: {}", f12.equals(&f14));
    println!("{f12} == {f15}: {}", f12.equals(&f15));
    println!("{f13} == {f14}: {}", f13.equals(&f14));

    let (f16, f17, f18) = (frac!(2 / 12), frac!(3 / 4), frac!(9 / 10));
    println!("{f16} < {f17}: {}", f16.less_than(&f17));
    println!("{f18} > {f17}: {}", f18.greater_than(&f17));

    for f in [f16, frac!(24 / 18), frac!(16 / 8), frac!(1 / 8), frac!(10 / 80)] {
        println!(
            "{f}: proper={} improper={} apparent={} unitary={}",
            f.is_proper(),
            f.is_improper(),
            f.is_apparent(),
            f.is_unitary()
        );
    }

    println!(
        "lenient \"12abc/4\": {}",
        Fraction::parse_with("12abc/4", ParsePolicy::Lenient)?
    );

    match Fraction::new(5, 0) {
        Err(e) => tracing::info!(%e, "zero denominator rejected"),
        Ok(f) => bail!("expected 5/0 to be rejected, got {f}"),
    }

    Ok(())
}
