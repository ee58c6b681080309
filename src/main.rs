use lengaburu_toss::{decide, default_teams, gen_seeder, Conditions, RandGen, TossError};
use std::ffi::OsString;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Reads the conditions from the full command line, program name included.
///
/// Usage: `toss [weather] [match_type]`. There are no flags, every word is a condition.
fn conditions_from_argv<I: IntoIterator<Item = OsString>>(argv: I) -> Conditions {
    Conditions::from_args(argv.into_iter().skip(1))
}

fn main() -> Result<(), TossError> {
    // Logs go to stderr, stdout only carries the outcome
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to start the logger");

    let conditions = conditions_from_argv(std::env::args_os());

    let teams = default_teams();
    let mut rng: RandGen = gen_seeder().make_rng();
    let outcome = decide(&teams, &conditions, &mut rng)?;
    println!("{outcome}");

    Ok(())
}
