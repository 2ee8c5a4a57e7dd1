use crate::core::{DecisionReport, TimeIndex};
use crate::formatting::FormattingConfig;
use crate::scoring::{Points, Recommendation};
use colored::*;
use comfy_table::{presets, ContentArrangement, Table};
use std::io::Write;

/// Width of the repair-vs-buy comparative bars, in glyphs
const COMPARATIVE_BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &DecisionReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_inputs(report)?;
        self.write_explanation(report)?;
        self.write_scores(report)?;
        self.write_recommendation(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Repair-or-Buy Decision Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_inputs(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        let input = &report.input;
        writeln!(self.writer, "## Inputs")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Input | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        writeln!(self.writer, "| Repair cost | {:.2} |", input.repair_cost)?;
        writeln!(self.writer, "| Repair time | {} days |", input.repair_time)?;
        writeln!(self.writer, "| New part cost | {:.2} |", input.new_cost)?;
        writeln!(
            self.writer,
            "| Allowed downtime | {} days |",
            input.allowed_downtime
        )?;
        writeln!(
            self.writer,
            "| Criticality | {} |",
            input.criticality.label()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_explanation(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        let result = &report.result;
        writeln!(self.writer, "## Explanation")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- **Cost index** = {:.1}% -> {} points",
            result.cost_index, result.cost_points
        )?;
        match result.time_index {
            TimeIndex::Unbounded => writeln!(
                self.writer,
                "- **Allowed downtime is zero** -> zero tolerance -> {} point",
                result.time_points
            )?,
            TimeIndex::Percent(p) => writeln!(
                self.writer,
                "- **Time index** = {:.1}% -> {} points",
                p, result.time_points
            )?,
        }
        writeln!(
            self.writer,
            "- **Criticality** = {} -> {} points",
            report.input.criticality.label(),
            result.criticality_points
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Final score: {:.2}** (40% cost, 30% time, 30% criticality)",
            result.final_score
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        let result = &report.result;
        writeln!(self.writer, "## Scores")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Criterion | Points (1-5) |")?;
        writeln!(self.writer, "|-----------|--------------|")?;
        writeln!(self.writer, "| Cost | {} |", result.cost_points)?;
        writeln!(self.writer, "| Time | {} |", result.time_points)?;
        writeln!(
            self.writer,
            "| Criticality | {} |",
            result.criticality_points
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Option | Score |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Repair | {:.2} |", result.final_score)?;
        writeln!(self.writer, "| Buy | {:.2} |", 5.0 - result.final_score)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendation(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        let recommendation = report.result.recommendation;
        writeln!(self.writer, "## Recommendation")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{}** - {}",
            recommendation.short_label(),
            recommendation.label()
        )?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    config: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self { writer, config }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_explanation(report)?;
        self.write_criteria_table(report)?;
        self.write_criterion_chart(report)?;
        self.write_comparative_chart(report)?;
        self.write_recommendation(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            "Repair-or-Buy Decision Report".bold().blue()
        )?;
        writeln!(self.writer, "{}", "=============================".blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_explanation(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        let result = &report.result;
        let money = self.config.emoji("💰", "[COST]");
        let clock = self.config.emoji("⏱", "[TIME]");
        let gear = self.config.emoji("⚙", "[CRIT]");

        writeln!(
            self.writer,
            "{} Cost index: {} -> {} points",
            money,
            format!("{:.1}%", result.cost_index).yellow(),
            result.cost_points.to_string().bold()
        )?;
        match result.time_index {
            TimeIndex::Unbounded => writeln!(
                self.writer,
                "{} Allowed downtime is zero -> zero tolerance -> {} point",
                clock,
                result.time_points.to_string().bold()
            )?,
            TimeIndex::Percent(p) => writeln!(
                self.writer,
                "{} Time index: {} -> {} points",
                clock,
                format!("{:.1}%", p).yellow(),
                result.time_points.to_string().bold()
            )?,
        }
        writeln!(
            self.writer,
            "{} Criticality: {} -> {} points",
            gear,
            report.input.criticality.label().yellow(),
            result.criticality_points.to_string().bold()
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Final score: {}",
            format!("{:.2}", result.final_score).bold()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_criteria_table(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        let result = &report.result;
        let mut table = Table::new();
        let preset = if self.config.emoji.should_use_emoji() {
            presets::UTF8_FULL
        } else {
            presets::ASCII_FULL
        };
        table
            .load_preset(preset)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Criterion", "Index", "Points (1-5)"]);
        table.add_row(vec![
            "Cost".to_string(),
            format!("{:.1}%", result.cost_index),
            result.cost_points.to_string(),
        ]);
        table.add_row(vec![
            "Time".to_string(),
            result.time_index.to_string(),
            result.time_points.to_string(),
        ]);
        table.add_row(vec![
            "Criticality".to_string(),
            report.input.criticality.label().to_string(),
            result.criticality_points.to_string(),
        ]);
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_criterion_chart(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        let result = &report.result;
        let chart = self.config.emoji("📊", "[CHART]");
        writeln!(self.writer, "{} Points per criterion:", chart)?;
        for (name, points) in [
            ("Cost", result.cost_points),
            ("Time", result.time_points),
            ("Criticality", result.criticality_points),
        ] {
            let bar = self.points_bar(points);
            writeln!(self.writer, "  {:<12} {} {}", name, bar.cyan(), points)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_comparative_chart(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        let repair_score = report.result.final_score;
        let buy_score = 5.0 - repair_score;
        let repair_bar = self.scaled_bar(repair_score);
        let buy_bar = self.scaled_bar(buy_score);
        writeln!(self.writer, "Repair vs buy:")?;
        writeln!(
            self.writer,
            "  {:<8} {} {:.2}",
            "Repair",
            repair_bar.green(),
            repair_score
        )?;
        writeln!(
            self.writer,
            "  {:<8} {} {:.2}",
            "Buy",
            buy_bar.red(),
            buy_score
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendation(&mut self, report: &DecisionReport) -> anyhow::Result<()> {
        let recommendation = report.result.recommendation;
        let short = recommendation.short_label();
        let colored_short = match recommendation {
            Recommendation::StronglyRepair => short.green().bold(),
            Recommendation::RepairWithCaution => short.cyan().bold(),
            Recommendation::LeanBuy => short.yellow().bold(),
            Recommendation::Buy => short.red().bold(),
        };
        writeln!(
            self.writer,
            "Recommendation: {} ({})",
            colored_short,
            recommendation.label()
        )?;
        Ok(())
    }

    fn points_bar(&self, points: Points) -> String {
        let glyph = self.config.emoji("█", "#");
        let filled = points.value() as usize;
        format!("{}{}", glyph.repeat(filled), " ".repeat(5 - filled))
    }

    fn scaled_bar(&self, score: f64) -> String {
        let glyph = self.config.emoji("█", "#");
        let filled = ((score / 5.0) * COMPARATIVE_BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(COMPARATIVE_BAR_WIDTH);
        format!(
            "{}{}",
            glyph.repeat(filled),
            " ".repeat(COMPARATIVE_BAR_WIDTH - filled)
        )
    }
}

pub fn create_writer(format: OutputFormat, config: FormattingConfig) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout(), config)),
    }
}

/// Render a report to a string, for writing to an output file.
pub fn render_report(
    format: OutputFormat,
    report: &DecisionReport,
    config: FormattingConfig,
) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Json => JsonWriter::new(&mut buffer).write_report(report)?,
        OutputFormat::Markdown => MarkdownWriter::new(&mut buffer).write_report(report)?,
        OutputFormat::Terminal => {
            TerminalWriter::new(&mut buffer, config).write_report(report)?
        }
    }
    Ok(String::from_utf8(buffer)?)
}
