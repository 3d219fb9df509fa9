//! User-facing strings.
//!
//! The site ships in Turkish; English is available through configuration.
//! Every visible string the controllers produce comes from a [`Messages`]
//! table so that tests can compare against the table rather than literals.

use serde::Deserialize;

/// Supported site locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Tr,
    En,
}

impl Locale {
    /// The string table for this locale.
    #[must_use]
    pub const fn messages(self) -> &'static Messages {
        match self {
            Self::Tr => &Messages::TURKISH,
            Self::En => &Messages::ENGLISH,
        }
    }
}

/// Localized strings used by the controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Prefix of the load-error text; the underlying error follows `": "`.
    pub load_failed: &'static str,
    /// Status while a contact submission is in flight.
    pub sending: &'static str,
    /// Status after a successful submission.
    pub sent: &'static str,
    /// Status after any failed submission. Never includes server text.
    pub send_failed: &'static str,
    /// Appended to the project title in the card image `alt`.
    pub screenshot_suffix: &'static str,
}

impl Messages {
    pub const TURKISH: Self = Self {
        load_failed: "Projeler yüklenemedi",
        sending: "Gönderiliyor...",
        sent: "Teşekkürler! Mesajın ulaştı. En kısa sürede dönüş yapacağım.",
        send_failed: "Gönderilemedi. Lütfen e-postanı doğru yazdığından emin ol veya daha sonra tekrar dene.",
        screenshot_suffix: "ekran görüntüsü",
    };

    pub const ENGLISH: Self = Self {
        load_failed: "Could not load projects",
        sending: "Sending...",
        sent: "Thanks! Your message arrived. I'll get back to you soon.",
        send_failed: "Could not send. Please check your email address or try again later.",
        screenshot_suffix: "screenshot",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parses_lowercase_tags() {
        let en: Locale = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(en, Locale::En);
        assert!(serde_json::from_str::<Locale>(r#""de""#).is_err());
    }

    #[test]
    fn default_locale_is_turkish() {
        assert_eq!(Locale::default().messages(), &Messages::TURKISH);
    }
}
