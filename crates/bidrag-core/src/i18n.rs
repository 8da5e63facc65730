//! Localization of user-facing wizard texts.
//!
//! The wizard supports bokmål (`nb`, the default), nynorsk (`nn`) and
//! English (`en`). Localization only ever affects the wording of step
//! titles and validation messages; it never changes what is validated.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display language for step titles and validation messages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Norwegian bokmål (default)
    #[default]
    Nb,

    /// Norwegian nynorsk
    Nn,

    /// English
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nb" | "no" => Ok(Locale::Nb),
            "nn" => Ok(Locale::Nn),
            "en" => Ok(Locale::En),
            _ => Err(format!("Unsupported locale: {s}")),
        }
    }
}

impl Locale {
    /// Convert to the language tag used in stored data and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Nb => "nb",
            Locale::Nn => "nn",
            Locale::En => "en",
        }
    }
}

/// Keys for every localizable text the engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    // Step titles
    StepPartene,
    StepBarna,
    StepPeriode,
    StepBekreftelse,

    // Validation messages
    NameRequired,
    IdentInvalid,
    IdentSame,
    ChildrenRequired,
    SumRequired,
    SumInvalid,
    FraDatoRequired,
    DatoInvalid,
    PeriodeOrder,
    BekreftRequired,
}

/// Look up the text for a message key in the given locale.
pub fn translate(locale: Locale, msg: Msg) -> &'static str {
    use Locale::{En, Nb, Nn};

    match msg {
        Msg::StepPartene => match locale {
            Nb => "Om partene",
            Nn => "Om partane",
            En => "About the parties",
        },
        Msg::StepBarna => match locale {
            Nb | Nn => "Om barna",
            En => "About the children",
        },
        Msg::StepPeriode => match locale {
            Nb | Nn => "Avtaleperiode",
            En => "Agreement period",
        },
        Msg::StepBekreftelse => match locale {
            Nb => "Oppsummering og bekreftelse",
            Nn => "Oppsummering og stadfesting",
            En => "Summary and confirmation",
        },
        Msg::NameRequired => match locale {
            Nb => "Navn må fylles ut",
            Nn => "Namn må fyllast ut",
            En => "A name is required",
        },
        Msg::IdentInvalid => match locale {
            Nb | Nn => "Fødselsnummeret er ugyldig",
            En => "The national identity number is invalid",
        },
        Msg::IdentSame => match locale {
            Nb => "Partene kan ikke ha samme fødselsnummer",
            Nn => "Partane kan ikkje ha same fødselsnummer",
            En => "The parties cannot share a national identity number",
        },
        Msg::ChildrenRequired => match locale {
            Nb => "Minst ett barn må legges til",
            Nn => "Minst eitt barn må leggjast til",
            En => "At least one child must be added",
        },
        Msg::SumRequired => match locale {
            Nb => "Beløp må fylles ut",
            Nn => "Beløp må fyllast ut",
            En => "An amount is required",
        },
        Msg::SumInvalid => match locale {
            Nb => "Beløpet må være et positivt heltall",
            Nn => "Beløpet må vere eit positivt heiltal",
            En => "The amount must be a positive whole number",
        },
        Msg::FraDatoRequired => match locale {
            Nb => "Startdato må fylles ut",
            Nn => "Startdato må fyllast ut",
            En => "A start date is required",
        },
        Msg::DatoInvalid => match locale {
            Nb | Nn => "Datoen er ugyldig",
            En => "The date is invalid",
        },
        Msg::PeriodeOrder => match locale {
            Nb => "Sluttdato må være etter startdato",
            Nn => "Sluttdato må vere etter startdato",
            En => "The end date must be after the start date",
        },
        Msg::BekreftRequired => match locale {
            Nb => "Avtalen må bekreftes før innsending",
            Nn => "Avtalen må stadfestast før innsending",
            En => "The agreement must be confirmed before submission",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("nb".parse::<Locale>(), Ok(Locale::Nb));
        assert_eq!("NO".parse::<Locale>(), Ok(Locale::Nb));
        assert_eq!("nn".parse::<Locale>(), Ok(Locale::Nn));
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert!("sv".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_locale_is_bokmal() {
        assert_eq!(Locale::default(), Locale::Nb);
    }

    #[test]
    fn test_translation_varies_by_locale() {
        assert_eq!(translate(Locale::Nb, Msg::NameRequired), "Navn må fylles ut");
        assert_eq!(translate(Locale::Nn, Msg::NameRequired), "Namn må fyllast ut");
        assert_eq!(translate(Locale::En, Msg::NameRequired), "A name is required");
    }
}
