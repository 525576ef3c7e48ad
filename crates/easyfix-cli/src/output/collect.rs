// SPDX-License-Identifier: Apache-2.0

use console::style;
use easyfix_core::utils::{format_relative_time, truncate};
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::CollectResult;

use super::Renderable;

/// Widest a ticket title gets before rendering truncates it.
const TITLE_WIDTH: usize = 60;

impl Renderable for CollectResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;
        if self.repositories.is_empty() {
            writeln!(w, "{}", style("No tickets collected.").yellow())?;
            writeln!(w)?;
            return Ok(());
        }

        for (name, report) in &self.repositories {
            let count = format!("{} tickets", report.ticket_count);
            writeln!(
                w,
                "{} {} {}",
                style(name).cyan().bold(),
                style(format!("[{}]", report.target_label)).yellow(),
                style(count).green()
            )?;
            if let Some(description) = &report.description {
                writeln!(w, "  {}", style(description).dim())?;
            }
            writeln!(
                w,
                "  maintained by {}, contact {}",
                report.maintainer.name, report.contact
            )?;

            for ticket in report.ticket_list.values() {
                writeln!(
                    w,
                    "    {} {} {}",
                    style(format!("#{}", ticket.number)).green(),
                    truncate(&ticket.title, TITLE_WIDTH),
                    style(format!(
                        "({}, updated {})",
                        ticket.creator.name,
                        format_relative_time(&ticket.last_updated)
                    ))
                    .dim()
                )?;
                if ctx.verbose {
                    writeln!(w, "      {}", style(&ticket.url).cyan().underlined())?;
                }
            }
            writeln!(w)?;
        }

        writeln!(
            w,
            "{}",
            style(format!(
                "{} passed, {} failed, {} total",
                self.passed, self.failed, self.total
            ))
            .bold()
        )?;
        writeln!(w)?;
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "## Easyfix tickets\n")?;
        if self.repositories.is_empty() {
            writeln!(w, "No tickets collected.")?;
            return Ok(());
        }

        for (name, report) in &self.repositories {
            writeln!(
                w,
                "### [{name}]({}) - {} tickets\n",
                report.url, report.ticket_count
            )?;
            if let Some(description) = &report.description {
                writeln!(w, "{description}\n")?;
            }
            for ticket in report.ticket_list.values() {
                writeln!(
                    w,
                    "- [#{} {}]({}) ({})",
                    ticket.number, ticket.title, ticket.url, ticket.creator.name
                )?;
            }
            writeln!(w)?;
        }

        writeln!(
            w,
            "**{} passed, {} failed, {} total**",
            self.passed, self.failed, self.total
        )?;
        Ok(())
    }
}
