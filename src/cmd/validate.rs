//! `edge-host-rewriter validate` — check a configuration file for errors.
//!
//! [`check`] builds the report; [`execute`] only decides which stream it
//! goes to. Invalid text reports go to stderr, everything else to stdout.

use std::path::Path;

use crate::cli::{ValidateArgs, ValidateFormat};
use crate::config::model::Config;
use crate::config::sources::file_source;
use crate::config::validation;
use crate::error::{EdgeError, ValidationError};

#[derive(Debug)]
pub enum Outcome {
    Valid(String),
    Invalid {
        report: String,
        errors: Vec<ValidationError>,
    },
}

pub fn execute(args: &ValidateArgs) -> Result<(), EdgeError> {
    match check(&args.file, &args.format)? {
        Outcome::Valid(report) => {
            println!("{report}");
            Ok(())
        }
        Outcome::Invalid { report, errors } => {
            match args.format {
                ValidateFormat::Text => eprintln!("{report}"),
                ValidateFormat::Json => println!("{report}"),
            }
            Err(EdgeError::ConfigValidation { errors })
        }
    }
}

/// Parse and validate `path`, rendering the result in `format`.
pub fn check(path: &Path, format: &ValidateFormat) -> Result<Outcome, EdgeError> {
    let config = file_source::read_and_parse(path)?;
    let display = path.display().to_string();

    Ok(match validation::validate(&config) {
        Ok(()) => Outcome::Valid(render_valid(&display, &config, format)),
        Err(errors) => Outcome::Invalid {
            report: render_invalid(&display, &errors, format),
            errors,
        },
    })
}

fn render_valid(display: &str, config: &Config, format: &ValidateFormat) -> String {
    match format {
        ValidateFormat::Text => format!(
            "\u{2713} {}",
            validation::format_validation_report(display, config)
        ),
        ValidateFormat::Json => serde_json::json!({
            "valid": true,
            "origin_host": config.origin_host,
        })
        .to_string(),
    }
}

fn render_invalid(display: &str, errors: &[ValidationError], format: &ValidateFormat) -> String {
    match format {
        ValidateFormat::Text => {
            let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
            format!(
                "\u{2717} {display} has {} errors\n\n{}",
                errors.len(),
                lines.join("\n")
            )
        }
        ValidateFormat::Json => serde_json::json!({
            "valid": false,
            "errors": errors
                .iter()
                .map(|e| serde_json::json!({
                    "field": e.field,
                    "message": e.message,
                    "suggestion": e.suggestion,
                }))
                .collect::<Vec<_>>(),
        })
        .to_string(),
    }
}
