//! Locale resolution against the built-in catalog.
//!
//! Tags are parsed with `icu_locid`, so both `en-GB` and the POSIX-style
//! `en_GB` are accepted. A tag resolves to its `language-REGION` entry when
//! the catalog has one, otherwise to its language (`en-US` renders as `en`).

pub(crate) mod data;

use std::fmt;
use std::str::FromStr;

use icu_locid::locale;
use log::trace;

pub(crate) use data::LocaleData;

use crate::EdtfError;

/// A locale identifier bound to the catalog entry that renders it.
#[derive(Debug, Clone)]
pub struct Locale {
    id:   icu_locid::Locale,
    data: &'static LocaleData,
}

impl Locale {
    /// Parses a BCP-47 tag (`de`, `en-GB`, `en_GB`) and resolves it.
    ///
    /// # Errors
    /// Returns `EdtfError::UnknownLocale` if the tag is malformed or no
    /// catalog entry serves it.
    pub fn parse(tag: &str) -> Result<Self, EdtfError> {
        let id: icu_locid::Locale = tag
            .replace('_', "-")
            .parse()
            .map_err(|_| EdtfError::UnknownLocale(tag.to_owned()))?;
        Self::from_id(id)
    }

    /// Resolves an already parsed identifier.
    ///
    /// # Errors
    /// Returns `EdtfError::UnknownLocale` if no catalog entry serves it.
    pub fn from_id(id: icu_locid::Locale) -> Result<Self, EdtfError> {
        let language = id.id.language.as_str();
        let regional = id.id.region.map(|region| format!("{language}-{}", region.as_str()));

        let data = regional
            .as_deref()
            .and_then(data::find)
            .or_else(|| data::find(language))
            .ok_or_else(|| EdtfError::UnknownLocale(id.to_string()))?;

        trace!("locale {id} resolved to catalog entry {}", data.tag);
        Ok(Self { id, data })
    }

    pub const fn id(&self) -> &icu_locid::Locale {
        &self.id
    }

    /// Tag of the catalog entry in use, e.g. `en` for `en-US`
    pub const fn catalog_tag(&self) -> &'static str {
        self.data.tag
    }

    pub(crate) const fn data(&self) -> &'static LocaleData {
        self.data
    }
}

/// Tags of every built-in locale.
pub fn available_locales() -> impl Iterator<Item = &'static str> {
    data::CATALOG.iter().map(|data| data.tag)
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            id:   locale!("en"),
            data: &data::EN,
        }
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Locale {}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl FromStr for Locale {
    type Err = EdtfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Anything that can name a locale: tags, `icu_locid` identifiers, or an
/// already resolved [`Locale`].
pub trait IntoLocale {
    /// # Errors
    /// Returns `EdtfError::UnknownLocale` when the value does not resolve.
    fn into_locale(self) -> Result<Locale, EdtfError>;
}

impl IntoLocale for Locale {
    fn into_locale(self) -> Result<Locale, EdtfError> {
        Ok(self)
    }
}

impl IntoLocale for &Locale {
    fn into_locale(self) -> Result<Locale, EdtfError> {
        Ok(self.clone())
    }
}

impl IntoLocale for &str {
    fn into_locale(self) -> Result<Locale, EdtfError> {
        Locale::parse(self)
    }
}

impl IntoLocale for &String {
    fn into_locale(self) -> Result<Locale, EdtfError> {
        Locale::parse(self)
    }
}

impl IntoLocale for String {
    fn into_locale(self) -> Result<Locale, EdtfError> {
        Locale::parse(&self)
    }
}

impl IntoLocale for icu_locid::Locale {
    fn into_locale(self) -> Result<Locale, EdtfError> {
        Locale::from_id(self)
    }
}
