use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::PathBuf;
use symlog_core::*;

#[derive(Parser)]
#[command(name = "symlog")]
#[command(about = "Symptom tracking and health-status engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a self-assessment and show guidance
    Assess {
        /// Symptoms you are experiencing (e.g. fever cough body_aches)
        symptoms: Vec<String>,

        /// Underlying conditions (e.g. smoking diabetes)
        #[arg(long = "condition")]
        conditions: Vec<String>,

        /// Age range (18-64 or 65+)
        #[arg(long)]
        age: Option<String>,
    },

    /// Record a symptom log entry dated now
    Log {
        /// Symptoms to record (e.g. fever cough)
        #[arg(required = true)]
        symptoms: Vec<String>,
    },

    /// Record today's check-in
    CheckIn {
        /// How you are feeling (good or not-well)
        status: String,
    },

    /// Show today's log entries and check-in
    Today,

    /// Show the 14-day symptom history
    History,

    /// Show the calendar window ending on the next Saturday
    Calendar {
        /// Number of days in the window
        #[arg(long)]
        days: Option<usize>,
    },

    /// Show the new-case trend from an exported case-count series
    Trend {
        /// CSV file with the exported series (defaults to case_data.csv
        /// in the data directory)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    symlog_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    match cli.command {
        Commands::Assess {
            symptoms,
            conditions,
            age,
        } => cmd_assess(symptoms, conditions, age),
        Commands::Log { symptoms } => cmd_log(data_dir, symptoms),
        Commands::CheckIn { status } => cmd_check_in(data_dir, status),
        Commands::Today => cmd_today(data_dir),
        Commands::History => cmd_history(data_dir),
        Commands::Calendar { days } => {
            cmd_calendar(data_dir, days.unwrap_or(config.dashboard.calendar_days))
        }
        Commands::Trend { file } => {
            let path = file.unwrap_or_else(|| data_dir.join("case_data.csv"));
            cmd_trend(&path, &config.dashboard.region)
        }
    }
}

fn log_path(data_dir: &PathBuf) -> PathBuf {
    data_dir.join("symptom_log.jsonl")
}

fn check_in_path(data_dir: &PathBuf) -> PathBuf {
    data_dir.join("check_ins.jsonl")
}

/// Parse raw symptom tags, warning about (and dropping) unknown ones
fn parse_symptoms(raw: &[String]) -> BTreeSet<Symptom> {
    raw.iter()
        .filter_map(|tag| match Symptom::from_tag(tag) {
            Some(symptom) => Some(symptom),
            None => {
                eprintln!("Unknown symptom: {}. Skipping.", tag);
                None
            }
        })
        .collect()
}

fn cmd_assess(
    symptoms: Vec<String>,
    conditions: Vec<String>,
    age: Option<String>,
) -> Result<()> {
    let mut answers = SelfAssessmentAnswers::default();

    // Route each reported symptom to its fixed tier
    for symptom in parse_symptoms(&symptoms) {
        match symptom.tier() {
            SymptomTier::Emergency => answers.emergency_symptoms.insert(symptom),
            SymptomTier::Primary => answers.primary_symptoms.insert(symptom),
            SymptomTier::Secondary => answers.secondary_symptoms.insert(symptom),
            SymptomTier::Other => answers.other_symptoms.insert(symptom),
        };
    }

    for raw in &conditions {
        match UnderlyingCondition::from_tag(raw) {
            Some(condition) => {
                answers.underlying_conditions.insert(condition);
            }
            None => eprintln!("Unknown condition: {}. Skipping.", raw),
        }
    }

    answers.age_range = age.as_deref().and_then(|raw| match raw {
        "18-64" => Some(AgeRange::EighteenToSixtyFour),
        "65+" => Some(AgeRange::SixtyFiveAndOver),
        _ => {
            eprintln!("Unknown age range: {}. Treating as unset.", raw);
            None
        }
    });

    let group = determine_symptom_group(&answers);
    display_guidance(group);

    Ok(())
}

fn cmd_log(data_dir: PathBuf, raw_symptoms: Vec<String>) -> Result<()> {
    let symptoms = parse_symptoms(&raw_symptoms);
    if symptoms.is_empty() {
        return Err(Error::Other("No recognized symptoms to log".into()));
    }

    let entry = SymptomLogEntry {
        id: uuid::Uuid::new_v4().to_string(),
        date: Utc::now(),
        symptoms,
    };

    let mut sink = JsonlSink::new(log_path(&data_dir));
    sink.append(&entry)?;

    println!("\n✓ Logged {} symptom(s)", entry.symptoms.len());
    for symptom in &entry.symptoms {
        println!("  → {}", symptom.tag());
    }

    Ok(())
}

fn cmd_check_in(data_dir: PathBuf, raw_status: String) -> Result<()> {
    let status = match raw_status.as_str() {
        "good" => CheckInStatus::FeelingGood,
        "not-well" => CheckInStatus::FeelingNotWell,
        _ => {
            return Err(Error::Other(format!(
                "Unknown check-in status: {} (expected good or not-well)",
                raw_status
            )))
        }
    };

    let check_in = DailyCheckIn {
        date: Utc::now(),
        status,
    };

    let mut sink = JsonlSink::new(check_in_path(&data_dir));
    sink.append(&check_in)?;

    println!("\n✓ Checked in: {}", status_label(status));
    Ok(())
}

fn load_state(data_dir: &PathBuf) -> Result<TrackerState> {
    let log_entries = read_log_entries(&log_path(data_dir))?;
    let check_ins = read_check_ins(&check_in_path(data_dir))?;

    Ok(TrackerState {
        answers: SelfAssessmentAnswers::default(),
        log_entries,
        check_ins,
    })
}

fn cmd_today(data_dir: PathBuf) -> Result<()> {
    let state = load_state(&data_dir)?;
    let now = Utc::now();

    let daily = state.daily_log_data();
    let today = daily
        .iter()
        .find(|data| symlog_core::datetime::is_same_day(data.date, now));

    println!("\n{}", now.format("%A, %B %-d"));
    println!("─────────────────────────────────────────");

    match today {
        Some(data) => {
            let status = data
                .check_in
                .map(|c| c.status)
                .unwrap_or(CheckInStatus::NotCheckedIn);
            println!("  Check-in: {}", status_label(status));

            if data.log_entries.is_empty() {
                println!("  No symptoms logged today");
            }
            for entry in &data.log_entries {
                let tags: Vec<&str> = entry.symptoms.iter().map(|s| s.tag()).collect();
                println!("  {}  {}", entry.date.format("%H:%M"), tags.join(", "));
            }
        }
        None => {
            println!("  Check-in: {}", status_label(CheckInStatus::NotCheckedIn));
            println!("  No symptoms logged today");
        }
    }

    println!();
    Ok(())
}

fn cmd_history(data_dir: PathBuf) -> Result<()> {
    let state = load_state(&data_dir)?;
    let history = state.symptom_history(Utc::now());

    println!("\nLast {} days", history.len());
    println!("─────────────────────────────────────────");

    for entry in &history {
        match entry {
            SymptomEntry::NoData { date } => {
                println!("  {}  —", date.format("%b %-d"));
            }
            SymptomEntry::Symptoms { date, symptoms, .. } => {
                let tags: Vec<&str> = symptoms.iter().map(|s| s.tag()).collect();
                println!("  {}  {}", date.format("%b %-d"), tags.join(", "));
            }
        }
    }

    println!();
    Ok(())
}

fn cmd_calendar(data_dir: PathBuf, days: usize) -> Result<()> {
    let state = load_state(&data_dir)?;
    let window = state.log_data_history(Utc::now(), days);

    println!("\n  Sun Mon Tue Wed Thu Fri Sat");

    // The window ends on a Saturday; pad the first row so weekdays align
    let leading = window
        .first()
        .map(|data| data.date.weekday().num_days_from_sunday() as usize)
        .unwrap_or(0);

    let mut row: Vec<String> = vec!["   ".into(); leading];
    for data in &window {
        row.push(format!("{:>2}{}", data.date.day(), day_marker(data)));
        if row.len() == 7 {
            println!("  {}", row.join(" "));
            row.clear();
        }
    }
    if !row.is_empty() {
        println!("  {}", row.join(" "));
    }

    println!("\n  ✓ feeling good   ✗ not feeling well   + symptoms logged\n");
    Ok(())
}

fn cmd_trend(path: &PathBuf, region: &str) -> Result<()> {
    let series = read_case_series(path)?;
    if series.is_empty() {
        println!("No case data available at {}", path.display());
        return Ok(());
    }

    let trend = cases_trend(&series);
    let direction = if trend > 0 { "up" } else { "down" };

    println!("\nCOVID stats in {}", region.to_uppercase());
    println!("─────────────────────────────────────────");
    println!(
        "  {} new cases on {}",
        series[0].positive_cases_new,
        series[0].date.format("%B %-d")
    );
    println!("  {}% {} from last week", trend.abs(), direction);
    println!();

    Ok(())
}

fn display_guidance(group: SymptomGroup) {
    let guidance = guidance_for_group(group);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  ASSESSMENT: {}", group_label(group));
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {}", guidance.intro);
    println!();

    for instruction in &guidance.instructions {
        println!("  → {}", instruction);
    }

    println!();
}

fn group_label(group: SymptomGroup) -> &'static str {
    match group {
        SymptomGroup::Emergency => "Emergency",
        SymptomGroup::Primary1 => "Primary 1",
        SymptomGroup::Primary2 => "Primary 2",
        SymptomGroup::Primary3 => "Primary 3",
        SymptomGroup::Secondary1 => "Secondary 1",
        SymptomGroup::Secondary2 => "Secondary 2",
        SymptomGroup::NonCovid => "Non-COVID",
        SymptomGroup::Asymptomatic => "Asymptomatic",
    }
}

fn status_label(status: CheckInStatus) -> &'static str {
    match status {
        CheckInStatus::NotCheckedIn => "not checked in",
        CheckInStatus::FeelingGood => "feeling good",
        CheckInStatus::FeelingNotWell => "not feeling well",
    }
}

fn day_marker(data: &DayLogData) -> &'static str {
    if !data.log_entries.is_empty() {
        return "+";
    }
    match data.check_in.map(|c| c.status) {
        Some(CheckInStatus::FeelingGood) => "✓",
        Some(CheckInStatus::FeelingNotWell) => "✗",
        _ => " ",
    }
}
