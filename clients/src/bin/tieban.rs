//! `tieban`: calculates an Iron-Plate Divine Number reading from four pillars.
//!
//! Prints the time slice, the body-life pair and base number, the
//! eight-hexagram and eight-corner rolls, and the four-gate secret numbers.
//!
//! **Usage:**
//! ```
//! tieban --year 壬子 --month 丙午 --day 庚午 --hour 壬午 [--gender female]
//!        [--config tieban.toml] [--format json] [-v]
//! ```
//!
//! Engine settings are read from the optional TOML file, then overridden by
//! `TIEBAN_YEAR_STEP_SCHEME`, `TIEBAN_YEAR_STEM_MULTIPLIER`,
//! `TIEBAN_YEAR_BRANCH_MULTIPLIER`, `TIEBAN_SECRET_CONSTANT` and
//! `TIEBAN_LINE_MULTIPLIER`. Log filtering follows `TIEBAN_LOG`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tieban::{Engine, EngineConfig, FourPillars, Gender, Pillar, Reading, Request};
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Calculate an Iron-Plate Divine Number reading.
#[derive(Parser)]
#[command(
    name = "tieban",
    about = "Calculate an Iron-Plate Divine Number (铁版神数) reading from four pillars"
)]
struct Args {
    /// Year pillar, e.g. 壬子 or ren-zi.
    #[arg(long)]
    year: Pillar,

    /// Month pillar.
    #[arg(long)]
    month: Pillar,

    /// Day pillar.
    #[arg(long)]
    day: Pillar,

    /// Hour pillar.
    #[arg(long)]
    hour: Pillar,

    /// Querent's gender (male, female, 男, 女).
    #[arg(long, default_value = "male")]
    gender: Gender,

    /// Engine settings file (TOML).
    #[arg(long, env = "TIEBAN_CONFIG")]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// How the reading is printed.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Human-readable report.
    Text,
    /// Pretty-printed JSON.
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    tracing::info!(?config, "engine settings");

    let pillars = FourPillars::new(args.year, args.month, args.day, args.hour);
    let reading = Engine::new(&config)
        .calculate(&Request::new(pillars, args.gender))
        .with_context(|| format!("calculation failed for {pillars}"))?;

    let output = match args.format {
        Format::Text => render_text(&reading).context("failed to render report")?,
        Format::Json => {
            serde_json::to_string_pretty(&reading).context("failed to serialise reading")?
        }
    };
    println!("{output}");
    Ok(())
}

fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

fn init_logging(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .with_env_var("TIEBAN_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the settings file if given, then applies `TIEBAN_*` overrides.
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("invalid settings in {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Applies overrides looked up by environment variable name.
fn apply_overrides(
    mut config: EngineConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<EngineConfig> {
    fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut T) -> Result<()>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        if let Some(value) = lookup(key) {
            *slot = value
                .parse()
                .with_context(|| format!("invalid {key}={value:?}"))?;
        }
        Ok(())
    }

    parse(&lookup, "TIEBAN_YEAR_STEP_SCHEME", &mut config.year_step_scheme)?;
    parse(&lookup, "TIEBAN_YEAR_STEM_MULTIPLIER", &mut config.year_stem_multiplier)?;
    parse(&lookup, "TIEBAN_YEAR_BRANCH_MULTIPLIER", &mut config.year_branch_multiplier)?;
    parse(&lookup, "TIEBAN_SECRET_CONSTANT", &mut config.secret_constant)?;
    parse(&lookup, "TIEBAN_LINE_MULTIPLIER", &mut config.line_multiplier)?;
    Ok(config)
}

fn render_text(reading: &Reading) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, reading)?;
    Ok(out)
}

fn write_report(out: &mut String, reading: &Reading) -> std::fmt::Result {
    let slice = &reading.time_slice;
    let body = &reading.body_life;
    let roll = &reading.roll;

    writeln!(out, "铁版神数 {}", reading.request.pillars)?;
    writeln!(out, "====================")?;
    writeln!(out)?;
    writeln!(
        out,
        "刻分: {} ÷ {} 余 {} → {}刻",
        slice.sum, slice.divisor, slice.remainder, slice.ke
    )?;
    writeln!(
        out,
        "身命卦: 上{} 下{} (奇 {}+{} → {}, 偶 {} → {})",
        body.pair.upper,
        body.pair.lower,
        body.odd_sum,
        body.odd_count,
        body.upper_ordinal,
        body.even_sum,
        body.lower_ordinal
    )?;
    writeln!(out, "基本数: {}", reading.base_number)?;
    writeln!(out)?;

    writeln!(out, "八卦滚 (v = {}, 动爻 m = {})", roll.step_value, roll.moving.residue())?;
    for (i, (entry, secret)) in roll.entries.iter().zip(&reading.secrets).enumerate() {
        writeln!(
            out,
            "  第{}卦 {:<8} {}  H={} Y={} 甲={} M={}",
            i + 1,
            entry.stage.label(),
            entry.pair,
            secret.h,
            secret.y,
            secret.jia,
            secret.m
        )?;
    }
    writeln!(out)?;

    writeln!(out, "八角滚")?;
    for (i, corner) in reading.corners.iter().enumerate() {
        writeln!(
            out,
            "  第{}变 {:<8} {}  数码头 {}",
            i + 1,
            corner.rule.label(),
            corner.pair,
            corner.number_head
        )?;
    }
    Ok(())
}
