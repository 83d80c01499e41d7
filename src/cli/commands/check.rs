use log::{error, info, warn};

use crate::cli::types::Commands;
use crate::config::{Config, Overrides, Settings};
use crate::front_matter::Document;
use crate::hooks::Filters;
use crate::sections::{scan_headings, sectionize, StructureError};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// What a dry run found in one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Headings found in the body
    pub headings: usize,
    /// Whether the document opts out of sectionizing
    pub disabled: bool,
    /// Whether a TOC would be prepended
    pub toc_included: bool,
    /// Why the headings cannot be nested, if they cannot
    pub error: Option<StructureError>,
}

/// Handle the check command, returning how many inputs failed
pub fn handle_check_command(command: &Commands, config: &Config) -> BoxResult<usize> {
    let mut failures = 0;

    if let Commands::Check { inputs } = command {
        for path in inputs {
            let content = match fs::read_file(path) {
                Ok(content) => content,
                Err(e) => {
                    error!("{}", e);
                    failures += 1;
                    continue;
                }
            };

            let report = match check_document(&content, config) {
                Ok(report) => report,
                Err(e) => {
                    error!("{}: {}", path.display(), e);
                    failures += 1;
                    continue;
                }
            };

            match &report.error {
                Some(err) => {
                    error!("{}: {}", path.display(), err);
                    failures += 1;
                }
                None if report.disabled => warn!("{}: sectionizing disabled", path.display()),
                None => info!(
                    "{}: {} headings, table of contents {}",
                    path.display(),
                    report.headings,
                    if report.toc_included { "included" } else { "omitted" }
                ),
            }
        }
    }

    Ok(failures)
}

/// Inspect a document's heading structure without keeping the output
pub fn check_document(content: &str, config: &Config) -> BoxResult<CheckReport> {
    let document = Document::parse(content)?;
    let settings = Settings::resolve(&Overrides::default(), document.front_matter.overrides(), config);
    let headings = scan_headings(document.body).len();

    let (toc_included, error) = match sectionize(document.body, &settings, &Filters::empty()) {
        Ok(sectionized) => (sectionized.toc_included, None),
        Err(err) => (false, Some(err)),
    };

    Ok(CheckReport {
        headings,
        disabled: settings.disabled,
        toc_included,
        error,
    })
}
