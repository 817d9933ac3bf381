//! `reportcard` command-line front-end.
//!
//! # Responsibility
//! - Load the grades file, run one command through `GradeService`, and save
//!   after successful mutations.
//! - Map core failure indicators to messages and a non-zero exit status.

mod args;

use anyhow::{bail, Context, Result};
use args::{Cli, Command};
use clap::Parser;
use log::info;
use reportcard_core::{
    default_log_level, init_logging, normalize_level, GradeService, MemoryStudentStore, Subjects,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let level = normalize_level(cli.log_level.as_deref().unwrap_or(default_log_level()))
        .context("invalid --log-level")?;
    if let Some(log_dir) = &cli.log_dir {
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let mut service = GradeService::new(MemoryStudentStore::new());
    service
        .load_from_file(&cli.data_file)
        .with_context(|| format!("failed to load `{}`", cli.data_file.display()))?;

    let mutates = cli.command.mutates();
    execute(&mut service, cli.command)?;

    if mutates {
        service
            .save_to_file(&cli.data_file)
            .with_context(|| format!("failed to save `{}`", cli.data_file.display()))?;
        info!("event=cli_save module=cli status=ok");
    }
    Ok(())
}

fn execute(service: &mut GradeService<MemoryStudentStore>, command: Command) -> Result<()> {
    match command {
        Command::Add(args) => {
            let id = args.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let subjects: Subjects = args.subjects.into_iter().collect();
            let id = service.add_student(&args.name, &id, &subjects)?;
            println!("Student added successfully (ID: {id})");
        }
        Command::Update(args) => {
            if !service.update_score(&args.id, &args.subject, args.score)? {
                bail!("student not found: {}", args.id);
            }
            println!("Score updated successfully");
        }
        Command::Delete(args) => {
            if !service.delete_student(&args.id) {
                bail!("student not found: {}", args.id);
            }
            println!("Student deleted successfully");
        }
        Command::Report(args) => match service.report(&args.id) {
            Some(report) => print!("{report}"),
            None => bail!("student not found: {}", args.id),
        },
        Command::List => {
            for student in service.list_students() {
                println!(
                    "{}\t{}\t{:.2}\t{}",
                    student.id(),
                    student.name(),
                    student.average(),
                    student.grade()
                );
            }
        }
    }
    Ok(())
}
