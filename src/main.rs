use std::{
    error::Error,
    io::{self, Write as _},
};

use chrono::{NaiveDate, TimeDelta};
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use sgd111::{
    LearnerConfig, OnlineLearner,
    stream::{Curve, Timestamp, print_outputs, run},
};

/// Trains a 1-1-1 ReLU network online, one SGD step per tick of a timestamped stream.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    learner: LearnerConfig,

    /// Replay the data this many times.
    #[arg(long, default_value_t = 1)]
    epochs: usize,

    /// Train on this many random inputs in [-1, 1) instead of the built-in samples.
    #[arg(long)]
    random: Option<usize>,

    /// Seed for `--random`.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// The function the network should learn, `1.5 * relu(2x + 0.5)`.
fn target(x: f64) -> f64 {
    1.5 * f64::max(0.0, 2.0 * x + 0.5)
}

fn inputs(cli: &Cli) -> Vec<f64> {
    match cli.random {
        None => vec![0.50, -0.10, 0.80, 0.20],
        Some(n) => {
            let mut rng = StdRng::seed_from_u64(cli.seed);
            (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = cli.learner.validate()?;

    let start: Timestamp = NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or("invalid start time")?;
    let inputs = inputs(&cli);
    let n_ticks = inputs.len() * cli.epochs;
    let xs = Curve::from_fn(
        start,
        TimeDelta::seconds(1),
        inputs.into_iter().cycle().take(n_ticks),
    )?;
    let ys = xs.map(|&x| target(x));

    let mut learner = OnlineLearner::from_config(&config);
    let outputs = run(&mut learner, &xs, &ys);

    let mut stdout = io::stdout().lock();
    print_outputs(&outputs, &mut stdout)?;
    writeln!(stdout)?;
    writeln!(stdout, "[{} updates, lr = {}]", learner.n_updates(), learner.lr())?;
    writeln!(stdout, "{}", learner.params().pretty_print())?;
    for x in [-0.5, 0.0, 0.5, 1.0] {
        writeln!(
            stdout,
            "x = {x:.02}, y_pred = {:.04}, y_true = {:.04}",
            learner.predict(x),
            target(x)
        )?;
    }
    Ok(())
}
