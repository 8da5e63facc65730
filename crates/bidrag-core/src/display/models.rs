//! Display implementations for reports and estimates.

use std::fmt;

use super::LocalDateTime;
use crate::calc::Estimate;
use crate::models::SessionStatus;
use crate::wizard::StatusReport;

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Session: {}", self.session.id)?;
        writeln!(f)?;

        let status = match self.status {
            SessionStatus::Incomplete => "Incomplete",
            SessionStatus::ReadyToSubmit => "Ready to submit",
            SessionStatus::Submitted => "Submitted",
        };
        writeln!(f, "**Status:** {status}")?;
        writeln!(
            f,
            "**Updated:** {}",
            LocalDateTime(&self.session.updated_at)
        )?;
        writeln!(f)?;

        for report in &self.steps {
            let marker = if report.step.id == self.active.id {
                " ← current"
            } else {
                ""
            };
            writeln!(
                f,
                "{}. {} — {}{}",
                report.step.ordinal,
                report.step.title(self.locale),
                report.progress.with_icon(),
                marker
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Estimated monthly support")?;
        writeln!(f)?;
        writeln!(f, "| Age | Cost | Share | Deduction | Amount |")?;
        writeln!(f, "|-----|------|-------|-----------|--------|")?;
        for child in &self.children {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                child.age, child.cost, child.share, child.deduction, child.amount
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "**Payer's income share:** {:.0}%",
            self.income_share * 100.0
        )?;
        let capped = if self.capped { " (capped by ability to pay)" } else { "" };
        writeln!(f, "**Total per month:** {} kr{}", self.total, capped)
    }
}
