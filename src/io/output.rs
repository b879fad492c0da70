use crate::config::DimensionWeights;
use crate::core::Severity;
use crate::scoring::{Grade, ScoreReport};
use crate::suggestions::{Priority, Suggestion};
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()>;
    fn write_suggestions(&mut self, suggestions: &[Suggestion]) -> anyhow::Result<()>;
    fn write_levels(&mut self, levels: &BTreeMap<String, usize>) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: serde::Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_suggestions(&mut self, suggestions: &[Suggestion]) -> anyhow::Result<()> {
        self.write_json(suggestions)
    }

    fn write_levels(&mut self, levels: &BTreeMap<String, usize>) -> anyhow::Result<()> {
        self.write_json(levels)
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    weights: DimensionWeights,
    verbosity: u8,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, weights: DimensionWeights) -> Self {
        Self {
            writer,
            weights,
            verbosity: 0,
        }
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        let rule = "═══════════════════════════════════════════";
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", rule.cyan())?;
        writeln!(self.writer, "{}", format!("  {}", title).bold().cyan())?;
        writeln!(self.writer, "{}", rule.cyan())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "Score: {} / 100  Grade: {}",
            report.total_score.to_string().bold(),
            colored_grade(report.grade)
        )?;
        writeln!(
            self.writer,
            "Flow elements: {} ({:?})  Weighted CFC: {} ({:?})",
            report.element_count,
            report.classification.size,
            report.weighted_cfc,
            report.classification.control_flow
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_dimensions(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Dimension", "Score", "Weight"]);

        for ((name, score), (_, weight)) in report
            .dimensions
            .named()
            .into_iter()
            .zip(self.weights.named())
        {
            let score = score.map_or_else(|| "n/a".to_string(), |s| format!("{:.1}", s));
            table.add_row(vec![name.to_string(), score, format!("{:.2}", weight)]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_issues(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        if report.issues.is_empty() {
            writeln!(self.writer, "{}", "No issues found".green())?;
            return Ok(());
        }
        writeln!(self.writer, "{} ({})", "Issues".bold(), report.issues.len())?;
        for issue in &report.issues {
            writeln!(
                self.writer,
                "  {} [{}] {}",
                colored_severity(issue.severity),
                issue.category,
                issue.message
            )?;
        }
        Ok(())
    }

    fn write_details(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "Gateways".bold())?;
        for gateway in &report.control_flow.gateways {
            writeln!(
                self.writer,
                "  {} {} fan-out {} CFC {} x depth {} = {}",
                gateway.node_id,
                gateway.cfc_type,
                gateway.fan_out,
                gateway.base_cfc,
                gateway.nesting_depth,
                gateway.weighted_cfc
            )?;
        }
        writeln!(self.writer, "{}", "Labels".bold())?;
        for label in &report.naming.labels {
            writeln!(
                self.writer,
                "  {:.2} {:?} '{}' {}",
                label.score,
                label.style,
                label.label,
                label.findings.join("; ")
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        self.write_header("DIAGRAM QUALITY REPORT")?;
        self.write_summary(report)?;
        self.write_dimensions(report)?;
        self.write_issues(report)?;
        if self.verbosity > 0 {
            self.write_details(report)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_suggestions(&mut self, suggestions: &[Suggestion]) -> anyhow::Result<()> {
        self.write_header("SUGGESTIONS")?;
        if suggestions.is_empty() {
            writeln!(self.writer, "{}", "Nothing to improve".green())?;
        }
        for (rank, suggestion) in suggestions.iter().enumerate() {
            writeln!(
                self.writer,
                "#{} {} {} (+{:.1} points)",
                rank + 1,
                colored_priority(suggestion.priority),
                suggestion.title.bold(),
                suggestion.score_impact
            )?;
            writeln!(self.writer, "   {}", suggestion.recommendation)?;
            for action in &suggestion.actions {
                writeln!(self.writer, "   - {}", action)?;
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_levels(&mut self, levels: &BTreeMap<String, usize>) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Node", "Level"]);
        let mut ordered: Vec<(&String, &usize)> = levels.iter().collect();
        ordered.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
        for (id, level) in ordered {
            table.add_row(vec![id.clone(), level.to_string()]);
        }
        writeln!(self.writer, "{table}")?;
        self.writer.flush()?;
        Ok(())
    }
}

fn colored_grade(grade: Grade) -> ColoredString {
    let text = grade.to_string();
    match grade {
        Grade::A => text.green().bold(),
        Grade::B => text.green(),
        Grade::C => text.yellow(),
        Grade::D => text.bright_red(),
        Grade::F => text.red().bold(),
    }
}

fn colored_severity(severity: Severity) -> ColoredString {
    let text = severity.to_string().to_uppercase();
    match severity {
        Severity::Critical => text.red().bold(),
        Severity::High => text.red(),
        Severity::Medium => text.yellow(),
        Severity::Low => text.blue(),
        Severity::Info => text.normal(),
    }
}

fn colored_priority(priority: Priority) -> ColoredString {
    let text = priority.to_string().to_uppercase();
    match priority {
        Priority::Critical => text.red().bold(),
        Priority::High => text.red(),
        Priority::Medium => text.yellow(),
        Priority::Low => text.blue(),
    }
}

/// Writer for `format`, sending output to `output` or stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    weights: DimensionWeights,
    verbosity: u8,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => {
            Box::new(TerminalWriter::new(sink, weights).with_verbosity(verbosity))
        }
    })
}
