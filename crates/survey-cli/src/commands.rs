use anyhow::{Context, Result, bail};
use tracing::{trace, warn};

use survey_cli::logging::redact_value;
use survey_cli::summary::{
    families_table, object_variables_table, report_table, rows_table, studies_table,
};
use survey_cli::{LoadOptions, Survey, SurveySummary, load_survey};
use survey_model::Identified;

use crate::cli::{RowsArgs, SurveyArgs};

fn load(args: &SurveyArgs) -> Result<Survey> {
    let options = LoadOptions::default().strict(args.strict);
    load_survey(&args.file, &options)
        .with_context(|| format!("load survey description {}", args.file.display()))
}

pub fn run_inspect(args: &SurveyArgs) -> Result<()> {
    let survey = load(args)?;
    let summary = SurveySummary::from_survey(&survey);
    println!("Survey: {}", args.file.display());
    println!("{}", studies_table(&summary));
    println!("{}", families_table(&summary));
    println!("{}", object_variables_table(&summary));
    Ok(())
}

pub fn run_rows(args: &RowsArgs) -> Result<()> {
    let survey = load(&args.survey)?;
    let selected: Vec<_> = match &args.register {
        Some(identifier) => match survey.register(identifier) {
            Some(data) => vec![data],
            None => bail!("register '{identifier}' not found"),
        },
        None => survey.registers.iter().collect(),
    };
    for data in selected {
        for row in data.rows() {
            for (field, value) in row.fields() {
                trace!(field, value = redact_value(&value.to_string()), "row value");
            }
        }
        println!("Register: {} ({} rows)", data.register().identifier(), data.len());
        println!("{}", rows_table(data));
    }
    Ok(())
}

/// Returns whether the check passed.
pub fn run_check(args: &SurveyArgs) -> Result<bool> {
    let survey = load(args)?;
    let report = survey.catalog.validate();
    for issue in &report.issues {
        warn!(code = %issue.code, identifier = %issue.identifier, "{}", issue.message);
    }
    if report.is_clean() {
        println!("No issues found.");
        return Ok(true);
    }
    println!("{}", report_table(&report));
    println!(
        "{} errors, {} warnings",
        report.error_count(),
        report.warning_count()
    );
    Ok(!report.has_errors() && !(args.strict && report.warning_count() > 0))
}
