// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::ReposResult;

use super::Renderable;

impl Renderable for ReposResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;
        if self.repositories.is_empty() {
            writeln!(w, "{}", style("No repositories configured.").yellow())?;
            writeln!(
                w,
                "Add a [[repositories]] entry to {}",
                easyfix_core::config_file_path().display()
            )?;
            writeln!(w)?;
            return Ok(());
        }

        writeln!(w, "{}", style("Configured repositories:").bold())?;
        writeln!(w)?;

        for (i, repo) in self.repositories.iter().enumerate() {
            let num = format!("{:>3}.", i + 1);
            let name = format!("{:<30}", repo.name);
            let label = format!("{:<15}", repo.label);

            writeln!(
                w,
                "  {} {} {} {}",
                style(num).dim(),
                style(name).cyan(),
                style(label).yellow(),
                style(&repo.contact).dim()
            )?;
        }

        writeln!(w)?;
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "## Configured Repositories\n")?;
        for repo in &self.repositories {
            writeln!(
                w,
                "- **{}** (label: `{}`) - contact: {}",
                repo.name, repo.label, repo.contact
            )?;
        }
        Ok(())
    }
}
