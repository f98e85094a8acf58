//! Format tokens and family normalization.

use core::fmt;

/// A recognized media format token.
///
/// Tokens are grouped into families: every member of a family denotes the
/// same underlying encoding (e.g. `jpg` and `jfif` are both JPEG). Use
/// [`SupportedFormat::normalize`] to collapse a family member to its
/// canonical representative.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SupportedFormat {
    Png,
    Gif,
    Bmp,
    Ico,
    Avif,
    Webp,

    // TIFF family
    Tiff,
    Tif,

    // SVG family
    Svg,
    Svgz,

    // HEIF family
    Heif,
    Heic,

    // JPEG family
    Jpeg,
    Jpg,
    Jfif,
    Jp2,
    Jxr,
    Jpe,
    Pjp,
    Pjpeg,

    // Audio
    Mp3,
    M4v,
    M4a,
    Wav,
    Flac,
    Aiff,
    Midi,

    // Video
    Mp4,
    Mpg,
    Mpeg,
    Mov,
    Avi,
    Wmv,
    Webm,
    Weba,
    Ogg,
    Oga,
    Opus,
    Ogv,
    Ogm,

    // Documents
    Pdf,
    Doc,
    Docx,
    Xls,
    Xlsx,
    Csv,
}

/// Every recognized format token, in declaration order.
pub const ALL_FORMATS: &[SupportedFormat] = &[
    SupportedFormat::Png,
    SupportedFormat::Gif,
    SupportedFormat::Bmp,
    SupportedFormat::Ico,
    SupportedFormat::Avif,
    SupportedFormat::Webp,
    SupportedFormat::Tiff,
    SupportedFormat::Tif,
    SupportedFormat::Svg,
    SupportedFormat::Svgz,
    SupportedFormat::Heif,
    SupportedFormat::Heic,
    SupportedFormat::Jpeg,
    SupportedFormat::Jpg,
    SupportedFormat::Jfif,
    SupportedFormat::Jp2,
    SupportedFormat::Jxr,
    SupportedFormat::Jpe,
    SupportedFormat::Pjp,
    SupportedFormat::Pjpeg,
    SupportedFormat::Mp3,
    SupportedFormat::M4v,
    SupportedFormat::M4a,
    SupportedFormat::Wav,
    SupportedFormat::Flac,
    SupportedFormat::Aiff,
    SupportedFormat::Midi,
    SupportedFormat::Mp4,
    SupportedFormat::Mpg,
    SupportedFormat::Mpeg,
    SupportedFormat::Mov,
    SupportedFormat::Avi,
    SupportedFormat::Wmv,
    SupportedFormat::Webm,
    SupportedFormat::Weba,
    SupportedFormat::Ogg,
    SupportedFormat::Oga,
    SupportedFormat::Opus,
    SupportedFormat::Ogv,
    SupportedFormat::Ogm,
    SupportedFormat::Pdf,
    SupportedFormat::Doc,
    SupportedFormat::Docx,
    SupportedFormat::Xls,
    SupportedFormat::Xlsx,
    SupportedFormat::Csv,
];

static TOKENS: phf::Map<&'static str, SupportedFormat> = phf::phf_map! {
    "png" => SupportedFormat::Png,
    "gif" => SupportedFormat::Gif,
    "bmp" => SupportedFormat::Bmp,
    "ico" => SupportedFormat::Ico,
    "avif" => SupportedFormat::Avif,
    "webp" => SupportedFormat::Webp,
    "tiff" => SupportedFormat::Tiff,
    "tif" => SupportedFormat::Tif,
    "svg" => SupportedFormat::Svg,
    "svgz" => SupportedFormat::Svgz,
    "heif" => SupportedFormat::Heif,
    "heic" => SupportedFormat::Heic,
    "jpeg" => SupportedFormat::Jpeg,
    "jpg" => SupportedFormat::Jpg,
    "jfif" => SupportedFormat::Jfif,
    "jp2" => SupportedFormat::Jp2,
    "jxr" => SupportedFormat::Jxr,
    "jpe" => SupportedFormat::Jpe,
    "pjp" => SupportedFormat::Pjp,
    "pjpeg" => SupportedFormat::Pjpeg,
    "mp3" => SupportedFormat::Mp3,
    "m4v" => SupportedFormat::M4v,
    "m4a" => SupportedFormat::M4a,
    "wav" => SupportedFormat::Wav,
    "flac" => SupportedFormat::Flac,
    "aiff" => SupportedFormat::Aiff,
    "mid" => SupportedFormat::Midi,
    "mp4" => SupportedFormat::Mp4,
    "mpg" => SupportedFormat::Mpg,
    "mpeg" => SupportedFormat::Mpeg,
    "mov" => SupportedFormat::Mov,
    "avi" => SupportedFormat::Avi,
    "wmv" => SupportedFormat::Wmv,
    "webm" => SupportedFormat::Webm,
    "weba" => SupportedFormat::Weba,
    "ogg" => SupportedFormat::Ogg,
    "oga" => SupportedFormat::Oga,
    "opus" => SupportedFormat::Opus,
    "ogv" => SupportedFormat::Ogv,
    "ogm" => SupportedFormat::Ogm,
    "pdf" => SupportedFormat::Pdf,
    "doc" => SupportedFormat::Doc,
    "docx" => SupportedFormat::Docx,
    "xls" => SupportedFormat::Xls,
    "xlsx" => SupportedFormat::Xlsx,
    "csv" => SupportedFormat::Csv,
};

impl SupportedFormat {
    /// Exact, case-sensitive token lookup. No fuzzy matching: `"PNG"` is
    /// not a recognized token.
    pub fn from_token(token: &str) -> Option<Self> {
        TOKENS.get(token).copied()
    }

    /// The textual token this variant was parsed from.
    pub fn token(self) -> &'static str {
        match self {
            SupportedFormat::Png => "png",
            SupportedFormat::Gif => "gif",
            SupportedFormat::Bmp => "bmp",
            SupportedFormat::Ico => "ico",
            SupportedFormat::Avif => "avif",
            SupportedFormat::Webp => "webp",
            SupportedFormat::Tiff => "tiff",
            SupportedFormat::Tif => "tif",
            SupportedFormat::Svg => "svg",
            SupportedFormat::Svgz => "svgz",
            SupportedFormat::Heif => "heif",
            SupportedFormat::Heic => "heic",
            SupportedFormat::Jpeg => "jpeg",
            SupportedFormat::Jpg => "jpg",
            SupportedFormat::Jfif => "jfif",
            SupportedFormat::Jp2 => "jp2",
            SupportedFormat::Jxr => "jxr",
            SupportedFormat::Jpe => "jpe",
            SupportedFormat::Pjp => "pjp",
            SupportedFormat::Pjpeg => "pjpeg",
            SupportedFormat::Mp3 => "mp3",
            SupportedFormat::M4v => "m4v",
            SupportedFormat::M4a => "m4a",
            SupportedFormat::Wav => "wav",
            SupportedFormat::Flac => "flac",
            SupportedFormat::Aiff => "aiff",
            SupportedFormat::Midi => "mid",
            SupportedFormat::Mp4 => "mp4",
            SupportedFormat::Mpg => "mpg",
            SupportedFormat::Mpeg => "mpeg",
            SupportedFormat::Mov => "mov",
            SupportedFormat::Avi => "avi",
            SupportedFormat::Wmv => "wmv",
            SupportedFormat::Webm => "webm",
            SupportedFormat::Weba => "weba",
            SupportedFormat::Ogg => "ogg",
            SupportedFormat::Oga => "oga",
            SupportedFormat::Opus => "opus",
            SupportedFormat::Ogv => "ogv",
            SupportedFormat::Ogm => "ogm",
            SupportedFormat::Pdf => "pdf",
            SupportedFormat::Doc => "doc",
            SupportedFormat::Docx => "docx",
            SupportedFormat::Xls => "xls",
            SupportedFormat::Xlsx => "xlsx",
            SupportedFormat::Csv => "csv",
        }
    }

    /// Collapse a family alias to the family's canonical representative.
    ///
    /// JPEG-family tokens all normalize to [`SupportedFormat::Jpeg`]; every
    /// other token maps to itself. Idempotent, and never fails; an
    /// unregistered format surfaces later, at factory resolution.
    pub fn normalize(self) -> Self {
        match self {
            SupportedFormat::Jpeg
            | SupportedFormat::Jpg
            | SupportedFormat::Jfif
            | SupportedFormat::Jp2
            | SupportedFormat::Jxr
            | SupportedFormat::Jpe
            | SupportedFormat::Pjp
            | SupportedFormat::Pjpeg => SupportedFormat::Jpeg,
            other => other,
        }
    }
}

impl fmt::Display for SupportedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
