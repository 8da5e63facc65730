//! Command handlers and subcommand definitions.
//!
//! Implements the CLI side of the parameter wrapper pattern: the argument
//! structures here carry the clap derives and convert into the framework-free
//! parameter types in `bidrag_core::params`, so the core stays usable from
//! other interfaces. The session identifier and locale come from global flags
//! and are injected by [`Cli`] when building core parameters.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use log::debug;

use bidrag_core::{
    calc::{estimate, VisitationClass},
    display::{Agreement, IncompleteSteps, Issues, OperationStatus},
    params::{EstimateParams, Goto, SessionRef, StepPatch},
    registry, Locale, Schema, Wizard,
};

use crate::renderer::TerminalRenderer;

/// Show the data and validation state of a step
///
/// Prints the step's current JSON data slice followed by any validation
/// issues for that step alone. Cross-step findings are not included; use
/// `session status` for the aggregate picture.
#[derive(Args)]
pub struct ShowStepArgs {
    /// 1-based ordinal of the step to show (1-4)
    #[arg(help = "1-based ordinal of the step to show (1-4)")]
    pub ordinal: u32,
}

/// Merge a JSON patch into a step's data
///
/// The patch is a JSON object matching the step's wire shape. Object fields
/// merge with what is already stored; scalars and arrays replace wholesale,
/// so resending a children list overwrites the previous list.
#[derive(Args)]
pub struct SetStepArgs {
    /// 1-based ordinal of the step to update (1-4)
    #[arg(help = "1-based ordinal of the step to update (1-4)")]
    pub ordinal: u32,
    /// JSON object to merge into the step's data
    #[arg(help = "JSON object to merge into the step's data, e.g. '{\"fraDato\": \"2026-01-01\"}'")]
    pub data: String,
}

/// Jump to a step by ordinal
#[derive(Args)]
pub struct GotoArgs {
    /// 1-based ordinal of the target step (1-4)
    #[arg(help = "1-based ordinal of the target step (1-4)")]
    pub ordinal: u32,
}

/// Estimate a monthly support amount
///
/// Advisory calculation only; the agreed amount in the children step is what
/// the agreement document uses. The estimate splits each child's maintenance
/// cost by income share, deducts for visitation, and caps the total at a
/// quarter of the payer's monthly income.
#[derive(Args)]
pub struct EstimateArgs {
    /// Payer's gross annual income in whole kroner
    #[arg(long, help = "Payer's gross annual income in whole kroner")]
    pub payer_income: u64,
    /// Receiver's gross annual income in whole kroner
    #[arg(long, help = "Receiver's gross annual income in whole kroner")]
    pub receiver_income: u64,
    /// Age of a child covered by the agreement (repeat per child)
    #[arg(long = "child-age", required = true, help = "Age of a child (repeat per child)")]
    pub child_ages: Vec<u8>,
    /// Visitation class 0-4 (0 = none, 4 = extended)
    #[arg(long, default_value = "0", help = "Visitation class 0-4 (0 = none)")]
    pub visitation: VisitationClass,
}

impl From<EstimateArgs> for EstimateParams {
    fn from(val: EstimateArgs) -> Self {
        EstimateParams {
            payer_income: val.payer_income,
            receiver_income: val.receiver_income,
            child_ages: val.child_ages,
            visitation: val.visitation,
        }
    }
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// List all steps with their progress
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show the data and validation state of a step
    #[command(alias = "s")]
    Show(ShowStepArgs),
    /// Merge a JSON patch into a step's data
    Set(SetStepArgs),
}

#[derive(Subcommand)]
pub enum NavCommands {
    /// Move to the next step
    Next,
    /// Move to the previous step
    #[command(alias = "prev")]
    Previous,
    /// Jump to a step by ordinal
    #[command(alias = "g")]
    Goto(GotoArgs),
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Show the session's aggregate and per-step status
    #[command(alias = "st")]
    Status,
    /// Submit the agreement and render the final document
    Submit,
    /// Re-render the agreement document of a submitted session
    Agreement,
    /// Delete the session and all its data
    Reset,
}

/// Command handler binding the wizard to terminal output.
pub struct Cli {
    wizard: Wizard,
    renderer: TerminalRenderer,
    session: String,
    locale: Locale,
}

impl Cli {
    pub fn new(wizard: Wizard, renderer: TerminalRenderer, session: String, locale: Locale) -> Self {
        Self {
            wizard,
            renderer,
            session,
            locale,
        }
    }

    fn session_ref(&self) -> SessionRef {
        SessionRef {
            session: self.session.clone(),
        }
    }

    /// Default command: the session status report.
    pub async fn status(&self) -> Result<()> {
        let report = self
            .wizard
            .status(&self.session_ref(), self.locale)
            .await
            .context("Failed to load session status")?;
        self.renderer.render(&report.to_string())
    }

    pub async fn handle_step_command(&self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::List => self.status().await,
            StepCommands::Show(args) => self.show_step(args).await,
            StepCommands::Set(args) => self.set_step(args).await,
        }
    }

    pub async fn handle_nav_command(&self, command: NavCommands) -> Result<()> {
        let step = match command {
            NavCommands::Next => self
                .wizard
                .advance(&self.session_ref())
                .await
                .context("Failed to advance")?,
            NavCommands::Previous => self
                .wizard
                .back(&self.session_ref())
                .await
                .context("Failed to go back")?,
            NavCommands::Goto(args) => self
                .wizard
                .goto(&Goto {
                    session: self.session.clone(),
                    ordinal: args.ordinal,
                })
                .await
                .context("Failed to change step")?,
        };

        self.renderer.render(&format!(
            "Now at step {}. {} (`{}`)\n",
            step.ordinal,
            step.title(self.locale),
            step.route
        ))
    }

    pub async fn handle_session_command(&self, command: SessionCommands) -> Result<()> {
        match command {
            SessionCommands::Status => self.status().await,
            SessionCommands::Submit => self.submit().await,
            SessionCommands::Agreement => self.agreement().await,
            SessionCommands::Reset => self.reset().await,
        }
    }

    pub async fn estimate(&self, args: EstimateArgs) -> Result<()> {
        let result = estimate(&args.into());
        self.renderer.render(&result.to_string())
    }

    async fn show_step(&self, args: ShowStepArgs) -> Result<()> {
        let step = registry::by_ordinal(args.ordinal)
            .with_context(|| format!("No step with ordinal {}", args.ordinal))?;

        let session = self
            .wizard
            .session(&self.session_ref())
            .await
            .context("Failed to load session")?;

        let data = session.form.slice(step.id);
        let issues = Schema::for_locale(self.locale).validate_step(step.id, &session.form);

        let mut output = format!(
            "# {}. {}\n\n```json\n{}\n```\n\n",
            step.ordinal,
            step.title(self.locale),
            serde_json::to_string_pretty(&data)?
        );
        output.push_str(&Issues(&issues).to_string());
        self.renderer.render(&output)
    }

    async fn set_step(&self, args: SetStepArgs) -> Result<()> {
        let step = registry::by_ordinal(args.ordinal)
            .with_context(|| format!("No step with ordinal {}", args.ordinal))?;

        let data: serde_json::Value = serde_json::from_str(&args.data)
            .context("Step data is not valid JSON")?;
        debug!("Patching step {} of session {}", step.token(), self.session);

        self.wizard
            .update_step(&StepPatch {
                session: self.session.clone(),
                step: step.id,
                data,
            })
            .await
            .context("Failed to update step")?;

        let incomplete = self
            .wizard
            .incomplete(&self.session_ref(), self.locale)
            .await?;

        let mut output = OperationStatus::success(format!(
            "Updated step {}. {}",
            step.ordinal,
            step.title(self.locale)
        ))
        .to_string();
        output.push('\n');
        output.push_str(&IncompleteSteps::new(&incomplete, self.locale).to_string());
        self.renderer.render(&output)
    }

    async fn submit(&self) -> Result<()> {
        let agreement = self
            .wizard
            .submit(&self.session_ref(), self.locale)
            .await
            .context("Submission failed")?;
        self.renderer.render(&agreement.to_string())
    }

    async fn agreement(&self) -> Result<()> {
        let session = self
            .wizard
            .session(&self.session_ref())
            .await
            .context("Failed to load session")?;

        if !session.submitted {
            bail!("Session '{}' has not been submitted yet", session.id);
        }

        let agreement = Agreement::new(session.id, session.form);
        self.renderer.render(&agreement.to_string())
    }

    async fn reset(&self) -> Result<()> {
        self.wizard
            .reset(&self.session_ref())
            .await
            .context("Failed to reset session")?;
        self.renderer.render(
            &OperationStatus::success(format!("Session '{}' deleted", self.session)).to_string(),
        )
    }
}
