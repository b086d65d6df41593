use hangman::cli::{CliInterface, parse_cli};
use hangman::{load_words_or_empty, logging, run_menu};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

fn main() {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let words = load_words_or_empty(&cli.words_path);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut interface = CliInterface::new(io::stdin().lock(), io::stdout().lock());
    if let Err(err) = run_menu(&words, &mut interface, &mut rng) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
