use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::engine::Engine;
use crate::errors::AppResult;
use crate::export::write_report;
use crate::ingest::load_table;
use crate::models::checks::{Check, EnabledChecks};
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_count};
use tracing::info_span;

/// Exit status when `--fail-on-findings` is set and something was found.
pub const EXIT_FINDINGS: i32 = 2;

/// Config toggles, narrowed by `--only`, then `--skip`.
pub fn resolve_checks(configured: EnabledChecks, only: &[Check], skip: &[Check]) -> EnabledChecks {
    let mut enabled = if only.is_empty() {
        configured
    } else {
        EnabledChecks::only(only)
    };
    for check in skip {
        enabled.set(*check, false);
    }
    enabled
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<i32> {
    let Commands::Check {
        daily,
        applications,
        only,
        skip,
        format,
        out,
        force,
        fail_on_findings,
    } = &cli.command
    else {
        return Ok(0);
    };

    let _span = info_span!("check").entered();

    let enabled = resolve_checks(cfg.checks, only, skip);
    let names: Vec<&str> = enabled.enabled_list().iter().map(Check::label).collect();
    info(format!("Checks: {}", names.join(", ")));

    let daily_table = load_table(daily, "daily")?;
    let app_table = load_table(applications, "application")?;

    let report = Engine::new(enabled).check_tables(&daily_table, &app_table)?;

    let format = format.unwrap_or(cfg.default_format);
    write_report(&report, format, out.as_deref(), *force)?;

    info(format!(
        "{}{}{} finding(s)",
        color_for_count(report.len()),
        report.len(),
        RESET
    ));

    if *fail_on_findings && !report.is_empty() {
        Ok(EXIT_FINDINGS)
    } else {
        Ok(0)
    }
}
