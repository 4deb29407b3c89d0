//! Count samples of a synthetic signal above a threshold, directly and
//! through a strided view of every other sample.

use tallylib::{count_if, summarize, Strided};

fn main() -> tallylib::Result<()> {
    let samples: Vec<f64> = (0..64).map(|i| (i as f64 * 0.3).sin()).collect();

    let above = count_if(&samples, |v, _| *v > 0.5);
    println!("{} of {} samples above 0.5", above, samples.len());

    let even = Strided::new(&samples, samples.len() / 2, 2, 0)?;
    let summary = summarize(&even, |v, _| *v > 0.5);
    println!(
        "even samples: {} of {} ({:.1}%)",
        summary.matched,
        summary.scanned,
        summary.fraction() * 100.0
    );

    Ok(())
}
