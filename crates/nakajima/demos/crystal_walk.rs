//! Walks a few edges of `B(infinity)` and `B(Lambda)`.
//!
//! Run with `RUST_LOG=trace` to see every operator application.

use std::sync::Arc;

use env_logger::Env;
use nakajima::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let a2: CartanType = "A2^(1)".parse()?;
    let a2 = Arc::new(a2);

    let infinity = InfinityCrystal::new(a2.clone(), None, Flavor::A)?;
    println!("{infinity}");
    let one = &infinity.module_generators()[0];
    if let Some(m) = infinity.f_string(one, &[2, 0, 1, 2, 1])? {
        println!("  f_1 f_2 f_1 f_0 f_2 (1) = {m}");
        println!("  as Y-monomial: {}", infinity.algebra().to_y(&m)?);
        println!("  weight: {}", infinity.weight(&m)?);
    }

    let c = CommutationMatrix::from_rows(&[vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]])?;
    let la = Weight::from_coefficients([(1, 2)]);
    let crystal = HighestWeightCrystal::new(a2, la, Some(c))?;
    println!("{crystal}");
    let generator = crystal.highest_weight_vector();
    for (i, next) in crystal.lower_all(generator)? {
        match next {
            Some(m) => println!("  f_{i}({generator}) = {m}"),
            None => println!("  f_{i}({generator}) = None"),
        }
    }
    Ok(())
}
