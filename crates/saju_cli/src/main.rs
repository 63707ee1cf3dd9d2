use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{ArgAction, Parser, Subcommand};
use saju_base::{ALL_ELEMENTS, NaYin, Pillar, day_pillar, na_yin};
use saju_calendar::LunarDate;
use saju_engine::{RawBirthRequest, SajuEngine, SajuResult};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

mod error;
mod settings;

use error::CliError;

#[derive(Parser)]
#[command(name = "saju", version, about = "Four Pillars (사주팔자) calculator")]
struct Cli {
    /// Settings file (TOML); `SAJU__*` environment variables override it
    #[arg(long, global = true, env = "SAJU_CONFIG")]
    config: Option<PathBuf>,

    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart for a birth moment
    Calculate {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: i32,
        #[arg(long)]
        day: i32,
        /// Birth hour 0-23; omit when unknown
        #[arg(long)]
        hour: Option<i32>,
        #[arg(long, requires = "hour")]
        minute: Option<i32>,
        /// Date is in the lunar calendar
        #[arg(long)]
        lunar: bool,
        /// Lunar date lies in the leap month
        #[arg(long, requires = "lunar")]
        leap: bool,
        /// male or female
        #[arg(long)]
        gender: String,
        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Annual pillars (流年) for a range of years
    Annual {
        #[arg(long)]
        birth_year: i32,
        #[arg(long)]
        from: i32,
        #[arg(long)]
        to: i32,
        #[arg(long)]
        json: bool,
    },
    /// Lunar date to solar date
    ToSolar {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u8,
        #[arg(long)]
        day: u8,
        #[arg(long)]
        leap: bool,
    },
    /// Solar date to lunar date
    ToLunar {
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },
    /// Governing solar term at a local moment
    SolarTerm {
        /// YYYY-MM-DDThh:mm[:ss], local civil time
        #[arg(long, value_parser = parse_local)]
        at: NaiveDateTime,
    },
    /// Day pillar of a civil date
    DayPillar {
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },
    /// Na Yin of a sexagenary index
    Nayin {
        /// Sexagenary index 0-59 (0 = 甲子)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..60))]
        index: u8,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Calculate {
            year,
            month,
            day,
            hour,
            minute,
            lunar,
            leap,
            gender,
            json,
        } => {
            let engine = load_engine(cli.config.as_deref())?;
            let raw = RawBirthRequest {
                birth_year: year,
                birth_month: month,
                birth_day: day,
                birth_hour: hour,
                birth_minute: minute,
                is_lunar: lunar,
                is_leap_month: leap,
                gender,
            };
            let result = engine.calculate(&raw)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_chart(&result);
            }
        }

        Commands::Annual {
            birth_year,
            from,
            to,
            json,
        } => {
            let engine = load_engine(cli.config.as_deref())?;
            let years = engine.annual_pillars_for_year(birth_year, from, to)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&years)?);
            } else {
                for a in years {
                    println!("{}  {}  age {}", a.year, a.pillar, a.age);
                }
            }
        }

        Commands::ToSolar {
            year,
            month,
            day,
            leap,
        } => {
            let engine = load_engine(cli.config.as_deref())?;
            let lunar = LunarDate::new(year, month, day, leap);
            let solar = engine.calendar().to_solar(&lunar)?;
            println!("{lunar} (lunar) = {solar}");
        }

        Commands::ToLunar { date } => {
            let engine = load_engine(cli.config.as_deref())?;
            let lunar = engine.calendar().to_lunar(date)?;
            println!("{date} = {lunar} (lunar)");
        }

        Commands::SolarTerm { at } => {
            let engine = load_engine(cli.config.as_deref())?;
            let term = engine.calendar().solar_term_at(at)?;
            println!(
                "{} {} ({}), index {}, since {}",
                term.term.hanja(),
                term.term.korean(),
                term.term.english(),
                term.term.index(),
                term.at.format("%Y-%m-%d %H:%M")
            );
            let next = engine.calendar().next_jie(at)?;
            println!(
                "Next month opens: {} ({}) at {}",
                next.term.hanja(),
                next.term.english(),
                next.at.format("%Y-%m-%d %H:%M")
            );
        }

        Commands::DayPillar { date } => {
            let pillar = day_pillar(date);
            println!(
                "{date}: {pillar} {} (cycle index {})",
                pillar.korean(),
                pillar.cycle_index()
            );
        }

        Commands::Nayin { index } => {
            let pillar = Pillar::from_cycle_index(i64::from(index));
            print_na_yin(&pillar.to_string(), na_yin(pillar));
        }
    }
    Ok(())
}

fn load_engine(path: Option<&std::path::Path>) -> Result<SajuEngine, CliError> {
    let config = settings::load(path)?;
    Ok(SajuEngine::new(config)?)
}

/// Parse `YYYY-MM-DDThh:mm` or `YYYY-MM-DDThh:mm:ss`.
fn parse_local(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| format!("expected YYYY-MM-DDThh:mm[:ss], got {s}"))
}

fn print_na_yin(label: &str, n: NaYin) {
    println!(
        "{label}: {} {} ({}, {})",
        n.hanja(),
        n.korean(),
        n.english(),
        n.element()
    );
}

fn print_chart(r: &SajuResult) {
    match &r.birth_time {
        Some(t) => println!("Solar date : {} {t}", r.solar_date),
        None => println!("Solar date : {} (time unknown)", r.solar_date),
    }
    if let Some(lunar) = r.lunar_date {
        println!("Lunar date : {lunar}");
    }
    println!("Pillars    : {}", r.bazi);
    println!("Ganji      : {}", r.ganji_korean);
    println!(
        "Day master : {} {} ({}, {}) {}",
        r.day_master.hanja,
        r.day_master.label,
        r.day_master.element,
        r.day_master.yin_yang.hanja(),
        r.day_master.emoji
    );
    println!("Day animal : {}", r.day_animal);
    println!("Zodiac     : {} {}", r.zodiac.emoji, r.zodiac.korean_label);

    let shares: Vec<String> = ALL_ELEMENTS
        .iter()
        .map(|e| format!("{} {}%", e.label(), r.elements.shares.get(*e)))
        .collect();
    println!("Elements   : {}", shares.join(", "));
    println!(
        "             dominant {}, weak {}",
        r.elements.dominant.label(),
        r.elements.weak.label()
    );

    let t = &r.ten_gods;
    print!(
        "Ten gods   : year {} {}, month {} {}",
        t.year_gan.hanja(),
        t.year_gan.english(),
        t.month_gan.hanja(),
        t.month_gan.english()
    );
    match t.hour_gan {
        Some(h) => println!(", hour {} {}", h.hanja(), h.english()),
        None => println!(),
    }
    print_na_yin("Na Yin day ", r.day_na_yin);
    print_na_yin("Na Yin year", r.year_na_yin);
    println!(
        "Solar term : {} {} since {}",
        r.solar_term.term.hanja(),
        r.solar_term.term.english(),
        r.solar_term.at.format("%Y-%m-%d %H:%M")
    );

    let luck = &r.decade_luck;
    let o = luck.start_offset;
    println!(
        "Decade luck: {:?}, first period after {}y {}m {}d ({})",
        luck.direction, o.years, o.months, o.days, luck.start_date
    );
    if let Some(c) = luck.childhood {
        println!(
            "   -  childhood  {}-{}  age {}-{}",
            c.start_year, c.end_year, c.start_age, c.end_age
        );
    }
    for p in &luck.periods {
        println!(
            "  {:>2}  {}  {}-{}  age {}-{}",
            p.order, p.pillar, p.start_year, p.end_year, p.start_age, p.end_age
        );
    }
    if let Some(a) = r.this_year {
        println!("This year  : {} {} (age {})", a.year, a.pillar, a.age);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use rstest::rstest;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_calculate_flags() {
        let cli = Cli::try_parse_from([
            "saju", "-dd", "calculate", "--year", "1990", "--month", "5", "--day", "15",
            "--hour", "7", "--minute", "30", "--gender", "male", "--json",
        ])
        .unwrap();
        assert_eq!(cli.debug, 2);
        match cli.command {
            Commands::Calculate {
                year, hour, json, lunar, ..
            } => {
                assert_eq!(year, 1990);
                assert_eq!(hour, Some(7));
                assert!(json);
                assert!(!lunar);
            }
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn leap_requires_lunar() {
        let parsed = Cli::try_parse_from([
            "saju", "calculate", "--year", "2020", "--month", "4", "--day", "1", "--leap",
            "--gender", "female",
        ]);
        assert!(parsed.is_err());
    }

    #[rstest]
    #[case::first("0", true)]
    #[case::last("59", true)]
    #[case::past_cycle("60", false)]
    #[case::negative("-1", false)]
    fn nayin_index_is_bounded(#[case] index: &str, #[case] accepted: bool) {
        assert_eq!(
            Cli::try_parse_from(["saju", "nayin", "--index", index]).is_ok(),
            accepted
        );
    }

    #[rstest]
    #[case::minutes("2024-02-04T17:27", "2024-02-04 17:27:00")]
    #[case::seconds("2024-02-04T17:27:09", "2024-02-04 17:27:09")]
    #[case::midnight("1990-02-04T00:00", "1990-02-04 00:00:00")]
    fn local_moment_formats(#[case] input: &str, #[case] expected: &str) {
        let parsed = parse_local(input).unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), expected);
    }

    #[rstest]
    #[case::space_separator("2024-02-04 17:27")]
    #[case::date_only("2024-02-04")]
    #[case::hour_25("2024-02-04T25:00")]
    fn local_moment_rejects(#[case] input: &str) {
        assert!(parse_local(input).is_err());
    }

    #[rstest]
    #[case::in_range(&["saju", "annual", "--birth-year", "1990", "--from", "2024", "--to", "2026"])]
    #[case::range_before_birth(&["saju", "annual", "--birth-year", "2000", "--from", "1990", "--to", "1995"])]
    fn parses_annual_flags(#[case] args: &[&str]) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Commands::Annual { .. }));
    }
}
