use std::io::BufRead;

use crate::aggregate::{Aggregator, IgnoredLabels, LanguageTotals};
use crate::cli::Cli;
use crate::config::FileConfigLoader;
use crate::error::{LangstatError, Result};
use crate::language::{LanguageCatalog, LanguageOverride, Taxonomy};
use crate::output::svg::{LanguageBarChart, LanguagePieChart};
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, RecordProgress, ReportFormatter, TextFormatter,
    write_file, write_stdout,
};
use crate::ranking::{BucketPolicy, RankedView, rank};
use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, EXIT_SUCCESS};

use super::context::{ReportSettings, color_choice_to_mode, load_config, open_input};

#[must_use]
pub fn run_report(cli: &Cli) -> i32 {
    match run_report_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::debug!(error_type = e.error_type(), "report failed");
            eprintln!("Error: {e}");
            if let Some(hint) = e.suggestion() {
                eprintln!("  hint: {hint}");
            }
            exit_code_for(&e)
        }
    }
}

pub(crate) fn run_report_impl(cli: &Cli) -> Result<i32> {
    // 1. Configuration, with command-line flags layered on top
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let settings = ReportSettings::resolve(config.clone(), cli)?;
    let taxonomy_path =
        FileConfigLoader::new().locate_taxonomy(settings.taxonomy.as_deref(), &config)?;

    // 2. Catalog
    let taxonomy = Taxonomy::load(&taxonomy_path)?;
    let catalog = build_catalog(&taxonomy, &settings.overrides)?;

    // 3. Aggregate the history stream
    let reader = open_input(cli.input.as_deref())?;
    let progress = RecordProgress::new(cli.quiet);
    let totals = aggregate_with_progress(reader, &catalog, &settings.ignore, &progress);
    progress.finish();
    let totals = totals?;

    // 4. Rank and report
    let view = rank(&totals, &catalog, settings.policy);
    let report = format_report(settings.format, &view, color_choice_to_mode(cli.color))?;
    write_stdout(&report)?;

    // 5. Charts
    if let Some(path) = &settings.bar_svg {
        let full = rank(&totals, &catalog, BucketPolicy::All);
        write_file(path, &LanguageBarChart::from_view(&full).render())?;
    }
    if let Some(path) = &settings.pie_svg {
        write_file(path, &LanguagePieChart::from_view(&view).render())?;
    }

    Ok(EXIT_SUCCESS)
}

/// Parse overrides and merge them over the taxonomy.
///
/// # Errors
/// Returns `InvalidOverride` for an override without `extension:Label` form.
pub fn build_catalog(taxonomy: &Taxonomy, overrides: &[String]) -> Result<LanguageCatalog> {
    let overrides = LanguageOverride::parse_all(overrides)?;
    Ok(LanguageCatalog::build(taxonomy, &overrides))
}

fn aggregate_with_progress<R: BufRead>(
    reader: R,
    catalog: &LanguageCatalog,
    ignore: &[String],
    progress: &RecordProgress,
) -> Result<LanguageTotals> {
    let mut aggregator = Aggregator::new(catalog);
    aggregator.consume(reader, || progress.inc())?;
    Ok(aggregator.finish(&IgnoredLabels::with_extra(ignore)))
}

/// Render the ranked view in the requested format.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_report(format: OutputFormat, view: &RankedView, color: ColorMode) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color).format(view),
        OutputFormat::Json => JsonFormatter.format(view).map(|mut json| {
            json.push('\n');
            json
        }),
    }
}

/// Map a library error to the process exit code.
#[must_use]
pub const fn exit_code_for(error: &LangstatError) -> i32 {
    if error.is_input_error() {
        EXIT_INPUT_ERROR
    } else {
        EXIT_CONFIG_ERROR
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
