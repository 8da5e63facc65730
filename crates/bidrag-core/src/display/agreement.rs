//! The rendered private agreement document.

use std::fmt;

use jiff::Timestamp;

use super::LocalDateTime;
use crate::models::FormValue;

/// A private agreement rendered from a completed, submitted session.
///
/// Formats as a markdown document; turning it into a PDF is the backend's
/// concern. The document language is bokmål, matching the legal template
/// the original system generated.
#[derive(Debug, Clone)]
pub struct Agreement {
    /// The session the agreement was submitted from
    pub session_id: String,

    /// The validated form value at submission time
    pub form: FormValue,

    /// When the agreement was rendered (UTC)
    pub submitted_at: Timestamp,
}

impl Agreement {
    /// Creates an agreement document from a validated form value.
    pub fn new(session_id: String, form: FormValue) -> Self {
        Self {
            session_id,
            form,
            submitted_at: Timestamp::now(),
        }
    }

    /// Total agreed amount per month, in whole kroner.
    ///
    /// The form is validated before submission, so every sum parses; a
    /// non-parsing sum contributes zero rather than failing the render.
    pub fn total(&self) -> i64 {
        self.form
            .barna
            .barn
            .iter()
            .filter_map(|child| child.sum.trim().parse::<i64>().ok())
            .sum()
    }
}

impl fmt::Display for Agreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Privat avtale om barnebidrag")?;
        writeln!(f)?;

        writeln!(f, "## Partene")?;
        writeln!(f)?;
        let pliktig = &self.form.partene.bidragspliktig;
        let mottaker = &self.form.partene.bidragsmottaker;
        writeln!(
            f,
            "**Bidragspliktig:** {} ({})",
            pliktig.fullt_navn, pliktig.ident
        )?;
        writeln!(
            f,
            "**Bidragsmottaker:** {} ({})",
            mottaker.fullt_navn, mottaker.ident
        )?;
        writeln!(f)?;

        writeln!(f, "## Barna")?;
        writeln!(f)?;
        for child in &self.form.barna.barn {
            writeln!(
                f,
                "- {} ({}): {} kr per måned",
                child.fullt_navn, child.ident, child.sum
            )?;
        }
        writeln!(f)?;
        writeln!(f, "**Samlet beløp per måned:** {} kr", self.total())?;
        writeln!(f)?;

        writeln!(f, "## Avtaleperiode")?;
        writeln!(f)?;
        let til = self.form.periode.til_dato.trim();
        if til.is_empty() {
            writeln!(
                f,
                "Avtalen gjelder fra {} og inntil videre.",
                self.form.periode.fra_dato
            )?;
        } else {
            writeln!(
                f,
                "Avtalen gjelder fra {} til {}.",
                self.form.periode.fra_dato, til
            )?;
        }
        writeln!(f)?;

        writeln!(f, "## Underskrifter")?;
        writeln!(f)?;
        writeln!(f, "Sted og dato: ____________________")?;
        writeln!(f)?;
        writeln!(f, "Bidragspliktig: ____________________")?;
        writeln!(f)?;
        writeln!(f, "Bidragsmottaker: ____________________")?;
        writeln!(f)?;
        writeln!(
            f,
            "*Sendt inn {} (sesjon {})*",
            LocalDateTime(&self.submitted_at),
            self.session_id
        )
    }
}
