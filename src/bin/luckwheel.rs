use std::{
    io::{Read as _, Write as _},
    num::NonZeroUsize,
    path::PathBuf,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};

use luckwheel::{DrawSession, Ease, WheelConfig, WheelError, geometry, parse_names};

#[derive(Parser, Debug)]
#[command(name = "luckwheel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an attendee list and print the resulting pool.
    Names(NamesArgs),
    /// Run draw rounds with an animated terminal wheel.
    Spin(SpinArgs),
}

#[derive(Parser, Debug)]
struct NamesArgs {
    /// Attendee list file (newline/comma separated). Reads stdin when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Print the pool as a JSON array.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct SpinArgs {
    /// Attendee list file (newline/comma separated). Reads stdin when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Number of draw rounds to run.
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Seed for a deterministic draw; uses OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Keep winners in the pool (a name may then win more than once).
    #[arg(long)]
    keep_winners: bool,

    /// Shuffle the pool once at load time.
    #[arg(long)]
    shuffle: bool,

    /// Minimum full revolutions per spin.
    #[arg(long, default_value_t = 5)]
    turns: u32,

    /// Animation frames per spin.
    #[arg(long, default_value_t = 50)]
    frames: usize,

    /// Delay between frames, in milliseconds.
    #[arg(long, default_value_t = 30)]
    interval_ms: u64,

    /// Spin deceleration profile.
    #[arg(long, value_enum, default_value_t = EaseChoice::OutCubic)]
    ease: EaseChoice,

    /// Emit one JSON draw record per round instead of animating.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EaseChoice {
    Linear,
    OutQuad,
    OutCubic,
}

impl From<EaseChoice> for Ease {
    fn from(choice: EaseChoice) -> Self {
        match choice {
            EaseChoice::Linear => Ease::Linear,
            EaseChoice::OutQuad => Ease::OutQuad,
            EaseChoice::OutCubic => Ease::OutCubic,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Names(args) => cmd_names(args),
        Command::Spin(args) => cmd_spin(args),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn read_attendee_text(in_path: Option<&PathBuf>) -> anyhow::Result<String> {
    match in_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read attendee list '{}'", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read attendee list from stdin")?;
            Ok(text)
        }
    }
}

fn cmd_names(args: NamesArgs) -> anyhow::Result<()> {
    let names = parse_names(&read_attendee_text(args.in_path.as_ref())?);
    if args.json {
        println!("{}", serde_json::to_string(&names)?);
    } else {
        for name in &names {
            println!("{name}");
        }
        eprintln!("{} attendee(s)", names.len());
    }
    Ok(())
}

fn cmd_spin(args: SpinArgs) -> anyhow::Result<()> {
    let text = read_attendee_text(args.in_path.as_ref())?;
    let config = WheelConfig {
        remove_winner_after_draw: !args.keep_winners,
        shuffle_on_load: args.shuffle,
        min_full_turns: args.turns,
        frame_count: args.frames,
        spin_ease: args.ease.into(),
    };
    let mut session = DrawSession::new(config);

    match args.seed {
        Some(seed) => run_rounds(&mut session, &mut StdRng::seed_from_u64(seed), &text, &args),
        None => run_rounds(&mut session, &mut rand::thread_rng(), &text, &args),
    }
}

fn run_rounds<R: Rng>(
    session: &mut DrawSession,
    rng: &mut R,
    text: &str,
    args: &SpinArgs,
) -> anyhow::Result<()> {
    session.load_text(text, rng);
    if session.remaining().is_empty() {
        println!("No attendees yet. Paste names (one per line, or comma separated).");
        return Ok(());
    }

    for _ in 0..args.rounds {
        // The wheel keeps showing the pre-draw pool while it spins.
        let wheel: Vec<String> = session.remaining().to_vec();
        let plan = match session.spin(rng) {
            Ok(plan) => plan,
            Err(WheelError::EmptyPool(_)) => {
                println!("No attendees left to draw.");
                break;
            }
            Err(err) => return Err(err.into()),
        };

        if args.json {
            println!("{}", serde_json::to_string(&plan.result)?);
        } else {
            animate(&wheel, &plan.frames, args.interval_ms)?;
        }

        session.finish_spin();
        if let Some(winner) = session.announced_winner() {
            if !args.json {
                println!("Congratulations, {winner}!");
                println!("Remaining attendees: {}", session.remaining().len());
            }
        }
        session.dismiss_winner();
    }
    Ok(())
}

/// Paces the frame sequence with a blocking sleep and shows the name under
/// the pointer. This is the only place in the crate that sleeps.
fn animate(
    wheel: &[String],
    frames: &luckwheel::FrameSequence,
    interval_ms: u64,
) -> anyhow::Result<()> {
    let pool_size = NonZeroUsize::new(wheel.len()).context("empty wheel cannot animate")?;
    let mut stdout = std::io::stdout();
    for angle in frames {
        let under_pointer = geometry::wedge_at_pointer(pool_size, angle);
        write!(stdout, "\r  [{:>8.1} deg] -> {:<24}", angle, wheel[under_pointer])?;
        stdout.flush()?;
        std::thread::sleep(Duration::from_millis(interval_ms));
    }
    writeln!(stdout)?;
    Ok(())
}
