//! Per-step validation rules.

use jiff::civil::Date;

use super::{ident, Schema};
use crate::i18n::Msg;
use crate::models::{FormValue, PartyData, ValidationIssue};

impl Schema {
    /// Step 1: both parties need a name and a valid, distinct ident.
    pub(super) fn validate_partene(&self, form: &FormValue, issues: &mut Vec<ValidationIssue>) {
        let parties = [
            ("bidragspliktig", &form.partene.bidragspliktig),
            ("bidragsmottaker", &form.partene.bidragsmottaker),
        ];

        for (role, party) in parties {
            self.validate_party(role, party, issues);
        }

        let pliktig = &form.partene.bidragspliktig.ident;
        let mottaker = &form.partene.bidragsmottaker.ident;
        if ident::is_valid(pliktig) && ident::is_valid(mottaker) && pliktig == mottaker {
            issues.push(ValidationIssue::new(
                &["partene", "bidragsmottaker", "ident"],
                self.msg(Msg::IdentSame),
            ));
        }
    }

    fn validate_party(&self, role: &str, party: &PartyData, issues: &mut Vec<ValidationIssue>) {
        if party.fullt_navn.trim().chars().count() < 2 {
            issues.push(ValidationIssue::new(
                &["partene", role, "fulltNavn"],
                self.msg(Msg::NameRequired),
            ));
        }
        if !ident::is_valid(&party.ident) {
            issues.push(ValidationIssue::new(
                &["partene", role, "ident"],
                self.msg(Msg::IdentInvalid),
            ));
        }
    }

    /// Step 2: at least one child; each child needs name, valid ident and a
    /// positive whole kroner amount.
    pub(super) fn validate_barna(&self, form: &FormValue, issues: &mut Vec<ValidationIssue>) {
        if form.barna.barn.is_empty() {
            issues.push(ValidationIssue::new(
                &["barna", "barn"],
                self.msg(Msg::ChildrenRequired),
            ));
            return;
        }

        for (index, child) in form.barna.barn.iter().enumerate() {
            let index = index.to_string();

            if child.fullt_navn.trim().chars().count() < 2 {
                issues.push(ValidationIssue::new(
                    &["barna", "barn", index.as_str(), "fulltNavn"],
                    self.msg(Msg::NameRequired),
                ));
            }
            if !ident::is_valid(&child.ident) {
                issues.push(ValidationIssue::new(
                    &["barna", "barn", index.as_str(), "ident"],
                    self.msg(Msg::IdentInvalid),
                ));
            }

            let sum = child.sum.trim();
            if sum.is_empty() {
                issues.push(ValidationIssue::new(
                    &["barna", "barn", index.as_str(), "sum"],
                    self.msg(Msg::SumRequired),
                ));
            } else if !matches!(sum.parse::<u32>(), Ok(amount) if amount > 0) {
                issues.push(ValidationIssue::new(
                    &["barna", "barn", index.as_str(), "sum"],
                    self.msg(Msg::SumInvalid),
                ));
            }
        }
    }

    /// Step 3: required, parseable start date; optional end date strictly
    /// after the start.
    pub(super) fn validate_periode(&self, form: &FormValue, issues: &mut Vec<ValidationIssue>) {
        let fra = form.periode.fra_dato.trim();
        let til = form.periode.til_dato.trim();

        let fra_dato = if fra.is_empty() {
            issues.push(ValidationIssue::new(
                &["periode", "fraDato"],
                self.msg(Msg::FraDatoRequired),
            ));
            None
        } else {
            let parsed = fra.parse::<Date>().ok();
            if parsed.is_none() {
                issues.push(ValidationIssue::new(
                    &["periode", "fraDato"],
                    self.msg(Msg::DatoInvalid),
                ));
            }
            parsed
        };

        if til.is_empty() {
            return;
        }
        match til.parse::<Date>() {
            Err(_) => issues.push(ValidationIssue::new(
                &["periode", "tilDato"],
                self.msg(Msg::DatoInvalid),
            )),
            Ok(til_dato) => {
                if let Some(fra_dato) = fra_dato {
                    if til_dato <= fra_dato {
                        issues.push(ValidationIssue::new(
                            &["periode", "tilDato"],
                            self.msg(Msg::PeriodeOrder),
                        ));
                    }
                }
            }
        }
    }

    /// Step 4: the summary confirmation must be checked.
    pub(super) fn validate_bekreftelse(&self, form: &FormValue, issues: &mut Vec<ValidationIssue>) {
        if !form.bekreftelse.bekreftet {
            issues.push(ValidationIssue::new(
                &["bekreftelse", "bekreftet"],
                self.msg(Msg::BekreftRequired),
            ));
        }
    }
}
