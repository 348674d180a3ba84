//! Static lookup tables: ISBN groups, IMEI type allocation codes, locale
//! tags, file extensions and MIME types.

use crate::selectors::{FileType, MimeType};

/// Key of the ISBN group used when a locale has no entry of its own.
pub const ISBN_DEFAULT_KEY: &str = "default";

/// Locale tag to ISBN registration group.
pub const ISBN_GROUPS: &[(&str, &str)] = &[
    ("cs", "80"),
    ("da", "87"),
    ("de", "3"),
    ("default", "1"),
    ("el", "960"),
    ("en", "1"),
    ("es", "84"),
    ("et", "9949"),
    ("fa", "600"),
    ("fi", "951"),
    ("fr", "2"),
    ("hu", "963"),
    ("is", "9979"),
    ("it", "88"),
    ("ja", "4"),
    ("kk", "601"),
    ("ko", "89"),
    ("nl", "90"),
    ("no", "82"),
    ("pl", "83"),
    ("pt", "85"),
    ("pt-br", "85"),
    ("ru", "5"),
    ("sv", "91"),
    ("tr", "975"),
    ("uk", "966"),
    ("zh", "7"),
];

/// Eight-digit IMEI type allocation codes.
pub const IMEI_TACS: &[&str] = &[
    "01124500", "01161200", "01194800", "01233700", "01300600", "35089080", "35099480",
    "35148420", "35148820", "35161508", "35170008", "35173208", "35209900", "35226005",
    "35238402", "35274901", "35291402", "35316004", "35328504", "35332203", "35351200",
    "35357800", "35376800", "35391805", "35405600", "35450502", "35511405", "35524803",
    "35566600", "35679404", "35686800", "35714904", "35730808", "35838706", "35920305",
    "35929005", "86107402", "86723902", "86873102", "99000000", "99001000", "99002000",
];

/// Windows language code identifiers.
pub const LOCALE_CODES: &[&str] = &[
    "af", "ar-ae", "ar-bh", "ar-dz", "ar-eg", "ar-iq", "ar-jo", "ar-kw", "ar-lb", "ar-ly",
    "ar-ma", "ar-om", "ar-qa", "ar-sa", "ar-sy", "ar-tn", "ar-ye", "be", "bg", "ca", "cs", "da",
    "de", "de-at", "de-ch", "de-li", "de-lu", "el", "en", "en-au", "en-bz", "en-ca", "en-gb",
    "en-ie", "en-jm", "en-nz", "en-tt", "en-us", "en-za", "es", "es-ar", "es-bo", "es-cl",
    "es-co", "es-cr", "es-do", "es-ec", "es-gt", "es-hn", "es-mx", "es-ni", "es-pa", "es-pe",
    "es-pr", "es-py", "es-sv", "es-uy", "es-ve", "et", "eu", "fa", "fi", "fo", "fr", "fr-be",
    "fr-ca", "fr-ch", "fr-lu", "ga", "gd", "he", "hi", "hr", "hu", "id", "is", "it", "it-ch",
    "ja", "ji", "ko", "lt", "lv", "mk", "ms", "mt", "nl", "nl-be", "no", "pl", "pt", "pt-br",
    "rm", "ro", "ro-mo", "ru", "ru-mo", "sb", "sk", "sl", "sq", "sr", "sv", "sv-fi", "sx", "sz",
    "th", "tn", "tr", "ts", "uk", "ur", "ve", "vi", "xh", "zh-cn", "zh-hk", "zh-sg", "zh-tw",
    "zu",
];

/// Units used when rendering file sizes.
pub const SIZE_UNITS: &[&str] = &["bytes", "kB", "MB", "GB", "TB"];

/// Look up a key in a pair table.
pub fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

pub fn extensions(file_type: FileType) -> &'static [&'static str] {
    match file_type {
        FileType::Source => &[
            ".a", ".asm", ".asp", ".awk", ".c", ".class", ".cpp", ".pl", ".js", ".java", ".clj",
            ".py", ".rb", ".hs", ".erl", ".rs", ".swift", ".html", ".json", ".xml", ".css",
            ".php", ".jl", ".r", ".cs", ".d", ".kt", ".go",
        ],
        FileType::Text => &[".doc", ".docx", ".log", ".rtf", ".md", ".pdf", ".odt", ".txt"],
        FileType::Data => &[".csv", ".dat", ".ged", ".pps", ".ppt", ".pptx"],
        FileType::Audio => &[".flac", ".mp3", ".m3u", ".m4a", ".wav", ".wma"],
        FileType::Video => &[".3gp", ".mp4", ".avi", ".m4v", ".mov", ".mpg", ".wmv"],
        FileType::Image => &[".bmp", ".jpg", ".jpeg", ".png", ".svg"],
        FileType::Executable => &[".apk", ".app", ".bat", ".jar", ".com", ".exe"],
        FileType::Compressed => &[".7z", ".war", ".zip", ".tar.gz", ".tar.xz", ".rar"],
    }
}

pub fn mime_types(mime: MimeType) -> &'static [&'static str] {
    match mime {
        MimeType::Application => &[
            "application/gzip",
            "application/java-archive",
            "application/javascript",
            "application/json",
            "application/msword",
            "application/octet-stream",
            "application/pdf",
            "application/postscript",
            "application/rtf",
            "application/vnd.ms-excel",
            "application/vnd.ms-powerpoint",
            "application/x-7z-compressed",
            "application/x-rar-compressed",
            "application/x-tar",
            "application/xml",
            "application/zip",
        ],
        MimeType::Audio => &[
            "audio/aac",
            "audio/flac",
            "audio/midi",
            "audio/mp4",
            "audio/mpeg",
            "audio/ogg",
            "audio/vnd.wave",
            "audio/webm",
            "audio/x-ms-wma",
        ],
        MimeType::Image => &[
            "image/bmp",
            "image/gif",
            "image/jpeg",
            "image/png",
            "image/svg+xml",
            "image/tiff",
            "image/vnd.microsoft.icon",
            "image/webp",
        ],
        MimeType::Message => &[
            "message/http",
            "message/imdn+xml",
            "message/partial",
            "message/rfc822",
        ],
        MimeType::Text => &[
            "text/cmd",
            "text/css",
            "text/csv",
            "text/html",
            "text/javascript",
            "text/markdown",
            "text/plain",
            "text/rtf",
            "text/vcard",
            "text/xml",
        ],
        MimeType::Video => &[
            "video/mp4",
            "video/mpeg",
            "video/ogg",
            "video/quicktime",
            "video/webm",
            "video/x-flv",
            "video/x-matroska",
            "video/x-ms-wmv",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isbn_groups_have_default_entry() {
        assert_eq!(lookup(ISBN_GROUPS, ISBN_DEFAULT_KEY), Some("1"));
        assert_eq!(lookup(ISBN_GROUPS, "de"), Some("3"));
        assert_eq!(lookup(ISBN_GROUPS, "tlh"), None);
    }

    #[test]
    fn isbn_groups_are_short_digit_strings() {
        for (locale, group) in ISBN_GROUPS {
            assert!(
                (1..=4).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_digit()),
                "bad group {group} for {locale}"
            );
        }
    }

    #[test]
    fn imei_tacs_are_eight_digits() {
        for tac in IMEI_TACS {
            assert_eq!(tac.len(), 8, "{tac}");
            assert!(tac.bytes().all(|b| b.is_ascii_digit()), "{tac}");
        }
    }

    #[test]
    fn every_selector_has_table_entries() {
        for file_type in FileType::ALL {
            assert!(!extensions(*file_type).is_empty());
            assert!(extensions(*file_type).iter().all(|ext| ext.starts_with('.')));
        }
        for mime in MimeType::ALL {
            let prefix = format!("{}/", mime.as_str());
            assert!(mime_types(*mime).iter().all(|m| m.starts_with(&prefix)));
        }
    }
}
