//! CLI smoke entry point.
//!
//! # Responsibility
//! - Resolve `THESISMAN_*` config, open the database and print a summary.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;
use thesisman_core::db::open_db;
use thesisman_core::{
    core_version, init_logging, CoreConfig, SqliteStudentRepository, SqliteThesisRepository,
    StudentService, ThesisService,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("thesisman: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = CoreConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level, log_dir)?;
    }

    println!("thesisman_core version={}", core_version());
    println!("db_path={}", config.db_path.display());

    let conn = open_db(&config.db_path).map_err(|err| err.to_string())?;
    let students = StudentService::new(
        SqliteStudentRepository::try_new(&conn).map_err(|err| err.to_string())?,
    );
    let theses = ThesisService::new(
        SqliteThesisRepository::try_new(&conn).map_err(|err| err.to_string())?,
    );

    let all_students = students.list_students().map_err(|err| err.to_string())?;
    println!("students={}", all_students.len());
    for student in &all_students {
        let written = theses
            .list_theses_for_student(student)
            .map_err(|err| err.to_string())?;
        println!("  {student} theses={}", written.len());
    }

    let all_theses = theses.list_theses().map_err(|err| err.to_string())?;
    println!("theses={}", all_theses.len());
    log::info!(
        "event=cli_summary module=cli status=ok students={} theses={}",
        all_students.len(),
        all_theses.len()
    );
    Ok(())
}
