use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use randkit::compose::ColorFormat;
use randkit::compose::TokioTimer;
use randkit::fixtures;
use randkit::fixtures::FixtureKind;
use randkit::Casing;
use randkit::Sampler;
use randkit::UniformSource;
use tracing::debug;

mod server;

#[derive(Debug, Parser)]
#[command(version, about = "Random values for test data and fixtures")]
struct Cli {
    /// How many times to run the command
    #[arg(short, long, global = true, env = "RANDKIT_REPEAT", default_value = "1")]
    repeat: NonZeroUsize,
    #[command(subcommand)]
    program: Program,
}

#[derive(Debug, Subcommand)]
enum Program {
    /// Serve every generator over HTTP/REST
    Serve(Serve),
    /// Integer between two bounds, in either order; fractions are rounded inwards
    Int {
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },
    /// Coin flip
    Bool,
    /// Letter, optionally bounded
    Letter(LetterArgs),
    /// String bounded position by position by two patterns of [0-9A-Za-z]
    String { min: String, max: String },
    /// One of the given items
    Pick {
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Distinct items, without replacement
    Sample {
        /// Number of items, at most one less than the number given
        #[arg(short)]
        n: Option<usize>,
        #[arg(required = true)]
        items: Vec<String>,
    },
    Word,
    Sentence {
        #[arg(short, long)]
        words: Option<usize>,
    },
    Paragraph {
        #[arg(short, long)]
        sentences: Option<usize>,
    },
    /// First and last name
    Name,
    /// Day of the week
    Day,
    /// Date between two ISO dates, in either order
    Date { from: NaiveDate, to: NaiveDate },
    Color {
        #[arg(short, long, value_enum, default_value = "hex")]
        format: ColorArg,
    },
    Uuid,
    /// HTTP status code
    Status,
    /// "true", "false", "TRUE" or "FALSE"
    BooleanString,
    /// Sleep a random number of milliseconds and report it
    Delay { min_ms: u64, max_ms: u64 },
    /// JSON array of generated records
    Fixture {
        #[arg(value_enum)]
        kind: FixtureKind,
        #[arg(short, long, default_value = "1")]
        count: usize,
    },
}

#[derive(Debug, Args)]
struct Serve {
    #[arg(env = "RANDKIT_ADDR", default_value = "0.0.0.0:55555")]
    addr: SocketAddr,
}

#[derive(Debug, Args)]
struct LetterArgs {
    #[arg(short, long, value_enum)]
    casing: Option<CasingArg>,
    #[arg(short, long)]
    start: Option<char>,
    #[arg(short, long)]
    end: Option<char>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CasingArg {
    Lower,
    Upper,
    Mixed,
}

impl From<CasingArg> for Casing {
    fn from(casing: CasingArg) -> Self {
        match casing {
            CasingArg::Lower => Casing::Lower,
            CasingArg::Upper => Casing::Upper,
            CasingArg::Mixed => Casing::Mixed,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ColorArg {
    Hex,
    Rgb,
}

impl From<ColorArg> for ColorFormat {
    fn from(format: ColorArg) -> Self {
        match format {
            ColorArg::Hex => ColorFormat::Hex,
            ColorArg::Rgb => ColorFormat::Rgb,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    debug!(?cli);

    if let Program::Serve(Serve { addr }) = cli.program {
        return server::run(&addr).await;
    }

    let sampler = Sampler::thread_rng();
    for _ in 0..cli.repeat.get() {
        let line = generate(&sampler, &cli.program).await?;
        println!("{line}");
    }
    Ok(())
}

async fn generate<S: UniformSource>(sampler: &Sampler<S>, program: &Program) -> anyhow::Result<String> {
    let line = match program {
        Program::Serve(_) => anyhow::bail!("serve does not produce a value"),
        Program::Int { min, max } => sampler
            .int_between_fractional(*min, *max)
            .context("drawing integer")?
            .to_string(),
        Program::Bool => sampler.boolean().to_string(),
        Program::Letter(LetterArgs { casing, start, end }) => sampler
            .letter(casing.map(Casing::from), *start, *end)
            .to_string(),
        Program::String { min, max } => sampler
            .arbitrary_string(min, max)
            .context("building bounded string")?,
        Program::Pick { items } => sampler.from_slice(items).context("picking item")?.clone(),
        Program::Sample { n, items } => sampler
            .sample(items, *n)
            .context("sampling items")?
            .join(" "),
        Program::Word => sampler.word().to_string(),
        Program::Sentence { words } => sampler.sentence(*words),
        Program::Paragraph { sentences } => sampler.paragraph(*sentences),
        Program::Name => sampler.full_name(),
        Program::Day => sampler.day().to_string(),
        Program::Date { from, to } => sampler.date_between(*from, *to).to_string(),
        Program::Color { format } => sampler.color().format((*format).into()),
        Program::Uuid => sampler.uuid().to_string(),
        Program::Status => sampler.http_status().to_string(),
        Program::BooleanString => sampler.boolean_string().to_string(),
        Program::Delay { min_ms, max_ms } => {
            let slept = sampler
                .delay(
                    &TokioTimer,
                    Duration::from_millis(*min_ms),
                    Duration::from_millis(*max_ms),
                )
                .await;
            format!("{} ms", slept.as_millis())
        }
        Program::Fixture { kind, count } => {
            let value = fixtures::generate(sampler, *kind, *count).context("generating fixtures")?;
            serde_json::to_string_pretty(&value)?
        }
    };
    Ok(line)
}
