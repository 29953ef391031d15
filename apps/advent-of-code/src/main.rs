use std::path::PathBuf;

use advent_of_code::{DAYS, INPUT_FILE, day_dir, fail, run_day};
use clap::Parser;
use harness::{AnswerStore, Mode, Runner};

#[derive(Parser)]
#[command(name = "advent-of-code")]
#[command(about = "Run Advent of Code solutions against recorded answers")]
struct Cli {
    /// Run a specific day by number
    #[arg(short, long)]
    day: Option<u32>,

    /// Run all available days
    #[arg(short, long, conflicts_with = "day")]
    all: bool,

    /// Print the answers and record them as the new baseline
    #[arg(short, long)]
    record: bool,

    /// Skip wall-clock timing when verifying
    #[arg(long)]
    no_timing: bool,

    /// Directory with one sub-directory per day
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Input file, instead of <root>/<day>/input.txt
    #[arg(long, requires = "day")]
    input: Option<PathBuf>,

    /// Directory of recorded answers, instead of <root>/<day>
    #[arg(long, requires = "day")]
    answers: Option<PathBuf>,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.record {
            Mode::Record
        } else {
            Mode::Verify
        }
    }

    fn run(&self, day: u32) {
        let dir = day_dir(&self.root, day);
        let input = self.input.clone().unwrap_or_else(|| dir.join(INPUT_FILE));
        let answers = AnswerStore::new(self.answers.clone().unwrap_or(dir));
        log::debug!(
            "day {}: input {}, answers in {}",
            day,
            input.display(),
            answers.dir().display()
        );

        let mut runner = Runner::new(self.mode(), answers).timed(!self.no_timing);
        match run_day(day, &input, &mut runner) {
            Some(Ok(())) => {}
            Some(Err(err)) => fail(err),
            None => eprintln!("Day {} not implemented", day),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.all {
        for &day in DAYS {
            cli.run(day);
        }
    } else if let Some(day) = cli.day {
        cli.run(day);
    } else {
        eprintln!("Usage: advent-of-code --day <N> or --all [--record]");
        eprintln!("Available days: {:?}", DAYS);
    }
}
