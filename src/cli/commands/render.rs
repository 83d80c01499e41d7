use log::{debug, info};

use crate::cli::types::Commands;
use crate::config::{Config, Overrides, Settings};
use crate::front_matter::Document;
use crate::hooks::Filters;
use crate::sections::{render, sectionize};
use crate::utils::error::{BoxResult, SectionizeError};
use crate::utils::fs;

/// Handle the render command
pub fn handle_render_command(command: &Commands, config: &Config) -> BoxResult<()> {
    if let Commands::Render { input, output, strict, overrides } = command {
        let content = fs::read_input(input.as_deref())?;
        let overrides = Overrides::from(overrides.clone());

        let rendered = render_document(&content, &overrides, config, *strict)?;
        fs::write_output(output.as_deref(), &rendered)?;

        match output {
            Some(path) if path.as_os_str() != fs::STDIO_MARKER => {
                info!("Wrote sectionized content to {}", path.display())
            }
            _ => debug!("Wrote sectionized content to stdout"),
        }
    }

    Ok(())
}

/// Sectionize a document body, keeping its front matter as written
///
/// In strict mode unnestable headings are an error instead of a diagnostic
/// comment in the output.
pub fn render_document(
    content: &str,
    overrides: &Overrides,
    config: &Config,
    strict: bool,
) -> BoxResult<String> {
    let document = Document::parse(content)?;
    let settings = Settings::resolve(overrides, document.front_matter.overrides(), config);
    let filters = Filters::default();

    let body = if strict {
        sectionize(document.body, &settings, &filters)
            .map_err(SectionizeError::from)?
            .html
    } else {
        render(document.body, &settings, &filters)
    };

    Ok(format!("{}{}", document.raw_front_matter, body))
}
