//! Command-line surface and environment-backed configuration.

use clap::{Args, Parser, Subcommand};
use reportcard_core::DEFAULT_DATA_FILE;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "reportcard", version, about = "Student report card manager")]
pub struct Cli {
    /// JSON file holding all student records
    #[arg(
        long,
        env = "REPORTCARD_DATA_FILE",
        value_name = "PATH",
        default_value = DEFAULT_DATA_FILE
    )]
    pub data_file: PathBuf,

    /// trace|debug|info|warn|error (defaults to debug/info by build mode)
    #[arg(long, env = "REPORTCARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "REPORTCARD_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new student
    Add(AddArgs),
    /// Set one subject score for a student
    Update(UpdateArgs),
    /// Remove a student
    Delete(IdArgs),
    /// Print a student's report card
    Report(IdArgs),
    /// List every student with average and grade
    List,
}

impl Command {
    /// Whether the command changes the store and needs a save afterwards.
    pub fn mutates(&self) -> bool {
        matches!(self, Self::Add(_) | Self::Update(_) | Self::Delete(_))
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    /// Student ID; a random UUID is used when omitted
    #[arg(long)]
    pub id: Option<String>,
    /// Initial score as SUBJECT=SCORE, repeatable
    #[arg(long = "subject", value_name = "SUBJECT=SCORE", value_parser = parse_subject_score)]
    pub subjects: Vec<(String, f64)>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long, allow_negative_numbers = true)]
    pub score: f64,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    #[arg(long)]
    pub id: String,
}

fn parse_subject_score(raw: &str) -> Result<(String, f64), String> {
    let (subject, score) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected SUBJECT=SCORE, got `{raw}`"))?;
    let subject = subject.trim();
    if subject.is_empty() {
        return Err("subject cannot be empty".to_string());
    }
    let score = score
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid score `{score}`: {err}"))?;
    Ok((subject.to_string(), score))
}
