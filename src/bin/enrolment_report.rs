use anyhow::{Context, Result};
use clap::Parser;
use enrolment_dashboard::{Cli, DashboardView, Language, UiMessage, build_engine};
use serde::Serialize;
use strum::IntoEnumIterator;

#[derive(Serialize)]
struct ReportEntry {
    language: Language,
    university: String,
    view: DashboardView,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Cli::parse();
    let report = build_report(&args)?;

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

/// Drives the engine through the same messages the UI sends, one entry per
/// (language, university) pair.
fn build_report(args: &Cli) -> Result<Vec<ReportEntry>> {
    let mut engine = build_engine(args).context("Failed to set up the dashboard engine")?;
    let names = engine.dataset.names();

    let mut report = Vec::with_capacity(names.len() * Language::iter().count());
    for language in Language::iter() {
        engine
            .dispatch(UiMessage::LanguageChosen(language.code().to_string()))
            .with_context(|| format!("Failed to switch to '{}'", language))?;

        for name in &names {
            engine
                .dispatch(UiMessage::BarActivated { name: name.clone() })
                .with_context(|| format!("Failed to select '{}'", name))?;

            report.push(ReportEntry {
                language,
                university: name.clone(),
                view: engine.view(),
            });
        }
    }

    log::info!("Built {} report entries", report.len());
    Ok(report)
}
