//! Site Models
//!
//! Display data for the menu and collection pages, and the contact form.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters escaped in `mailto:` query values
const MAILTO_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'=');

/// Price in euro cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price(pub u32);

impl Price {
    pub const fn cents(cents: u32) -> Self {
        Self(cents)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "€{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// One sellable item, defined at build time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: Price,
    /// Category tag shown on the card
    pub category: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Croissant,
    Wheat,
    Cake,
    Coffee,
}

impl CategoryIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            CategoryIcon::Croissant => "🥐",
            CategoryIcon::Wheat => "🌾",
            CategoryIcon::Cake => "🍰",
            CategoryIcon::Coffee => "☕",
        }
    }
}

/// A titled group of items; `id` doubles as the DOM anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySection {
    pub id: &'static str,
    pub label: &'static str,
    pub subtitle: &'static str,
    pub icon: CategoryIcon,
    pub items: &'static [DisplayItem],
}

impl CategorySection {
    /// Class shared by this section's item cards
    pub fn item_class(&self) -> String {
        format!("item-{}", self.id)
    }
}

// ========================
// Contact Form
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    #[default]
    General,
    WeddingEvents,
    WholesaleB2B,
    PressMedia,
}

impl InquiryType {
    pub const ALL: [InquiryType; 4] = [
        InquiryType::General,
        InquiryType::WeddingEvents,
        InquiryType::WholesaleB2B,
        InquiryType::PressMedia,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::WeddingEvents => "Wedding / Events",
            InquiryType::WholesaleB2B => "Wholesale / B2B",
            InquiryType::PressMedia => "Press & Media",
        }
    }

    /// Stable value for `<option value>`
    pub fn key(self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::WeddingEvents => "wedding_events",
            InquiryType::WholesaleB2B => "wholesale_b2b",
            InquiryType::PressMedia => "press_media",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Mailbox that handles this kind of inquiry
    pub fn recipient(self) -> &'static str {
        match self {
            InquiryType::WholesaleB2B => "b2b@orphee.nl",
            _ => "info@orphee.nl",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("please tell us your name")]
    MissingName,
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
    #[error("please write a message")]
    MissingMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub inquiry: InquiryType,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !is_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    /// `mailto:` URL that opens the visitor's mail client with the form prefilled
    pub fn mailto(&self) -> Result<String, ContactError> {
        self.validate()?;
        let subject = format!("{} from {}", self.inquiry.label(), self.name.trim());
        let body = format!("{}\n\n{}\n{}", self.message.trim(), self.name.trim(), self.email.trim());
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            self.inquiry.recipient(),
            utf8_percent_encode(&subject, MAILTO_VALUE),
            utf8_percent_encode(&body, MAILTO_VALUE)
        ))
    }
}

/// `local@domain.tld` with no whitespace
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}
