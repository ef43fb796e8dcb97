use clap::Parser;
use dice_expr::common::Int;
use dice_expr::roll::{MarkdownStringifier, SimpleStringifier, DEFAULT_MAX_ROLLS};
use dice_expr::{RollContext, Total};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const SEPARATOR: &str = "----------------------------------------";

/// Roll dice notation such as `3d6+2*4`.
#[derive(Parser, Debug)]
#[command(name = "roll", version, about)]
struct Cli {
    /// Expressions to evaluate; reads them from stdin when none are given
    expressions: Vec<String>,

    /// Seed the random source for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of dice a single expression may roll
    #[arg(long, default_value_t = DEFAULT_MAX_ROLLS)]
    max_rolls: usize,

    /// Do not limit the number of dice rolled
    #[arg(long, conflicts_with = "max_rolls")]
    unbounded: bool,

    /// Print only the grand total
    #[arg(short, long)]
    quiet: bool,

    /// Render the rolls as markdown
    #[arg(long)]
    markdown: bool,

    /// Print a random integer between MIN and MAX instead
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true)]
    range: Option<Vec<Int>>,
}

impl Cli {
    fn print(&self, total: &Total) {
        if !self.quiet {
            let trace = if self.markdown {
                total.render::<MarkdownStringifier>()
            } else {
                total.render::<SimpleStringifier>()
            };
            if !trace.is_empty() {
                println!("{}", trace);
            }
            println!("{}", SEPARATOR);
        }
        println!("grand total: {}", total.value);
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_env("DICE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let max_rolls = (!cli.unbounded).then_some(cli.max_rolls);
    let mut ctx = RollContext::new(max_rolls, rng);

    if let Some(range) = &cli.range {
        return match ctx.roll_range(range[0], range[1]) {
            Ok(x) => {
                println!("{}", x);
                ExitCode::SUCCESS
            }
            Err(why) => {
                eprintln!("Error: {}", why);
                ExitCode::FAILURE
            }
        };
    }

    if cli.expressions.is_empty() {
        return match prompt(&cli, &mut ctx) {
            Ok(()) => ExitCode::SUCCESS,
            Err(why) => {
                eprintln!("Error: {}", why);
                ExitCode::FAILURE
            }
        };
    }

    let mut status = ExitCode::SUCCESS;
    for expr in &cli.expressions {
        if cli.expressions.len() > 1 && !cli.quiet {
            println!("{}", expr);
        }
        match ctx.eval(expr) {
            Ok(total) => cli.print(&total),
            Err(why) => {
                eprintln!("Error: {}", why);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}

fn prompt(cli: &Cli, ctx: &mut RollContext<StdRng>) -> io::Result<()> {
    print!("> ");
    io::stdout().flush()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match ctx.eval(&line) {
                Ok(total) => cli.print(&total),
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}
