// SPDX-License-Identifier: Apache-2.0

//! Output rendering for CLI commands.
//!
//! Command handlers return plain data structs; this module turns them into
//! text, JSON, YAML, or markdown on stdout depending on the selected format.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

use crate::cli::{OutputContext, OutputFormat};

/// A command result that knows how to present itself.
///
/// JSON and YAML come for free through `Serialize`; implementors only
/// provide the human-readable renderings.
pub trait Renderable: Serialize {
    /// Render as human-readable text to the given writer.
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()>;

    /// Render as markdown. Falls back to the text rendering.
    fn render_markdown(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        self.render_text(w, ctx)
    }
}

/// Dispatches on the requested output format and writes to stdout.
pub fn render<T: Renderable>(result: &T, ctx: &OutputContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result)
                .context("Failed to serialize output to JSON")?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml =
                serde_saphyr::to_string(result).context("Failed to serialize output to YAML")?;
            println!("{yaml}");
        }
        OutputFormat::Markdown => {
            result
                .render_markdown(&mut io::stdout(), ctx)
                .context("Failed to render markdown")?;
        }
        OutputFormat::Text => {
            result
                .render_text(&mut io::stdout(), ctx)
                .context("Failed to render text")?;
        }
    }
    Ok(())
}

mod auth;
mod collect;
mod repos;
