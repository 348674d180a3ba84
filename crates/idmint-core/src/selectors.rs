use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// ISBN layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsbnFormat {
    #[default]
    #[serde(rename = "isbn-10")]
    Isbn10,
    #[serde(rename = "isbn-13")]
    Isbn13,
}

impl IsbnFormat {
    pub const ALL: &'static [Self] = &[Self::Isbn10, Self::Isbn13];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "isbn-10" => Some(Self::Isbn10),
            "isbn-13" => Some(Self::Isbn13),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Isbn10 => "isbn-10",
            Self::Isbn13 => "isbn-13",
        }
    }
}

/// EAN barcode length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EanFormat {
    #[default]
    #[serde(rename = "ean-13")]
    Ean13,
    #[serde(rename = "ean-8")]
    Ean8,
}

impl EanFormat {
    pub const ALL: &'static [Self] = &[Self::Ean13, Self::Ean8];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ean-13" => Some(Self::Ean13),
            "ean-8" => Some(Self::Ean8),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ean13 => "ean-13",
            Self::Ean8 => "ean-8",
        }
    }

    /// Number of digits in the code.
    pub fn digits(self) -> usize {
        match self {
            Self::Ean13 => 13,
            Self::Ean8 => 8,
        }
    }
}

/// Family of file extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Source,
    Text,
    Data,
    Audio,
    Video,
    Image,
    Executable,
    Compressed,
}

impl FileType {
    pub const ALL: &'static [Self] = &[
        Self::Source,
        Self::Text,
        Self::Data,
        Self::Audio,
        Self::Video,
        Self::Image,
        Self::Executable,
        Self::Compressed,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "source" => Some(Self::Source),
            "text" => Some(Self::Text),
            "data" => Some(Self::Data),
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            "image" => Some(Self::Image),
            "executable" => Some(Self::Executable),
            "compressed" => Some(Self::Compressed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Text => "text",
            Self::Data => "data",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Image => "image",
            Self::Executable => "executable",
            Self::Compressed => "compressed",
        }
    }
}

/// Top-level MIME type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MimeType {
    Application,
    Audio,
    Image,
    Message,
    Text,
    Video,
}

impl MimeType {
    pub const ALL: &'static [Self] = &[
        Self::Application,
        Self::Audio,
        Self::Image,
        Self::Message,
        Self::Text,
        Self::Video,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "application" => Some(Self::Application),
            "audio" => Some(Self::Audio),
            "image" => Some(Self::Image),
            "message" => Some(Self::Message),
            "text" => Some(Self::Text),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Message => "message",
            Self::Text => "text",
            Self::Video => "video",
        }
    }
}

macro_rules! selector_traits {
    ($ty:ty, $label:literal) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse(value).ok_or_else(|| Error::UnrecognizedSelector {
                    selector: $label,
                    value: value.to_string(),
                })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

selector_traits!(IsbnFormat, "isbn format");
selector_traits!(EanFormat, "ean format");
selector_traits!(FileType, "file type");
selector_traits!(MimeType, "mime type");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_inverse_of_as_str() {
        for format in IsbnFormat::ALL {
            assert_eq!(IsbnFormat::parse(format.as_str()), Some(*format));
        }
        for format in EanFormat::ALL {
            assert_eq!(EanFormat::parse(format.as_str()), Some(*format));
        }
        for file_type in FileType::ALL {
            assert_eq!(FileType::parse(file_type.as_str()), Some(*file_type));
        }
        for mime in MimeType::ALL {
            assert_eq!(MimeType::parse(mime.as_str()), Some(*mime));
        }
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        let err = "isbn-11".parse::<IsbnFormat>().unwrap_err();
        assert_eq!(
            err,
            Error::UnrecognizedSelector {
                selector: "isbn format",
                value: "isbn-11".to_string(),
            }
        );
        assert!("EAN-13".parse::<EanFormat>().is_err());
        assert!("".parse::<FileType>().is_err());
        assert!("font".parse::<MimeType>().is_err());
    }

    #[test]
    fn defaults_match_documented_formats() {
        assert_eq!(IsbnFormat::default(), IsbnFormat::Isbn10);
        assert_eq!(EanFormat::default(), EanFormat::Ean13);
        assert_eq!(EanFormat::Ean8.digits(), 8);
        assert_eq!(EanFormat::Ean13.digits(), 13);
    }
}
