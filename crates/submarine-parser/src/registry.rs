//! Static tag tables: recognition patterns for languages, streaming providers
//! and quality sources, plus the lookup sets used during normalization.
//!
//! Tables are compiled once on first use and shared by every parser instance.

use std::sync::LazyLock;

use fancy_regex::Regex as FancyRegex;
use phf::{phf_map, phf_set};
use regex::Regex;

use crate::model::{Language, QualityResolution, QualitySource, StreamingProvider};

/// Recognition pattern of a language. English is the fallback and has none.
pub fn language_pattern(language: Language) -> Option<&'static str> {
    let pattern = match language {
        Language::English => return None,
        Language::French => r"(?i)(?:\bFRA?\b|french)",
        Language::Spanish => r"(?i)spanish",
        Language::German => r"(?i)\b(?:ger|german|videomann|deu)\b",
        Language::Italian => r"(?i)\b(?:ita|italian)\b",
        Language::Danish => r"(?i)danish",
        Language::Dutch => r"(?i)\b(?:dutch)\b",
        Language::Japanese => r"(?i)\b(?:japanese|jp)\b",
        Language::Icelandic => r"(?i)icelandic",
        Language::Chinese => r"(?i)\[(?:CH[ST]|BIG5|GB)\]|简|繁|字幕|chinese|cantonese|mandarin",
        Language::Russian => r"(?i)\b(?:russian|rus)\b",
        Language::Polish => r"(?i)\b(?:PL\W?DUB|DUB\W?PL|LEK\W?PL|PL\W?LEK|polish|PL|POL)\b",
        Language::Vietnamese => r"(?i)vietnamese",
        Language::Swedish => r"(?i)swedish",
        Language::Norwegian => r"(?i)norwegian",
        Language::Finnish => r"(?i)finnish",
        Language::Turkish => r"(?i)turkish",
        Language::Portuguese => r"(?i)portuguese",
        Language::Flemish => r"(?i)flemish",
        Language::Greek => r"(?i)greek",
        Language::Korean => r"(?i)(?:\bKR\b|korean)",
        Language::Hungarian => r"(?i)\b(?:HUNDUB|HUN)\b",
        Language::Hebrew => r"(?i)\bHebDub\b",
        Language::Lithuanian => r"(?i)\b(?:lithuanian|LT)\b",
        // Upper case only, `cz` is too common inside words
        Language::Czech => r"\bCZ\b",
        Language::Arabic => r"(?i)arabic",
        Language::Hindi => r"(?i)hindi",
    };
    Some(pattern)
}

/// Recognition pattern of a streaming provider.
pub fn streaming_provider_pattern(provider: StreamingProvider) -> &'static str {
    match provider {
        StreamingProvider::Amazon => r"(?i)(?:amzn|amazon)(?=[ ._-]web[ ._-]?(?:dl|rip)?)",
        StreamingProvider::Netflix => r"(?i)(?:nf|netflix)(?=[ ._-]web[ ._-]?(?:dl|rip)?)",
        StreamingProvider::AppleTv => r"(?i)(?:atvp|aptv)(?=[ ._-]web[ ._-]?(?:dl|rip)?)",
        StreamingProvider::HboMax => r"(?i)hmax(?=[ ._-]web[ ._-]?(?:dl|rip)?)",
        StreamingProvider::Disney => {
            r"(?i)(?:dp|dsnp|dsny|disney|disney\+)(?=[ ._-]web[ ._-]?(?:dl|rip)?)"
        }
        StreamingProvider::Hulu => r"(?i)hulu(?=[ ._-]web[ ._-]?(?:dl|rip)?)",
        StreamingProvider::Crunchyroll => {
            r"(?i)(?:cr|crunchyroll|cr-dub)(?=[ ._\-)](?:web[ ._-]?(?:dl|rip)?)?)"
        }
        StreamingProvider::Funimation => r"(?i)(?:funi|funidub|funimation)",
        StreamingProvider::YoutubePremium => r"(?i)red(?=[ ._-]web[ ._-]?(?:dl|rip)?)",
        StreamingProvider::Peacock => r"(?i)pcok(?=[ ._-]web[ ._-]?(?:dl|rip)?)",
        StreamingProvider::DcUniverse => r"(?i)dcu(?=[ ._-]web[ ._-]?(?:dl|rip)?)",
        StreamingProvider::HboNow => r"(?i)hbo(?=[ ._-]web[ ._-]?(?:dl|rip)?)",
        StreamingProvider::ParamountPlus => r"(?i)pmtp(?=[ ._-]web[ ._-]?(?:dl|rip)?)",
        StreamingProvider::ComedyCentral => r"(?i)\bCC\b[ ._-]web[ ._-]?(?:dl|rip)?\b",
        StreamingProvider::Crave => r"(?i)\bcrave?\b[ ._-]web[ ._-]?(?:dl|rip)?\b",
        StreamingProvider::Hidive => r"(?i)\bHIDI(?:VE)?\b",
        StreamingProvider::ITunes => r"(?i)\b(?:it|itunes)\b(?=[ ._-]web[ ._-]?(?:dl|rip)\b)",
        StreamingProvider::MoviesAnywhere => {
            r"(?i)(?<!dts[ .-]hd[ .-])(?<!dts[ .-]hd)(?<!dtshd[ .-])(?<!dtshd)\bma\b(?=.*\bweb[ ._-]?(?:dl|rip)\b)"
        }
    }
}

/// Source patterns, tried in order; the first match wins.
const SOURCE_PATTERNS: [(QualitySource, &str); 9] = [
    (
        QualitySource::BlurayDisk,
        r"(?i)\b(?:COMPLETE[ ._-]?BLU-?RAY|BDMV|BD(?:25|50|66|100)|BDISO|Blu-?Ray[ ._-]?(?:ISO|Dis[ck]))\b",
    ),
    (QualitySource::BlurayRemux, r"(?i)\b(?:(?:BD|UHD)[ ._-]?)?Remux\b"),
    (
        QualitySource::Bluray,
        r"(?i)\b(?:M?Blu-?Ray|HD-?DVD|UHDBD|BDRip|BDMux|BR-?Rip|BD)\b|\bBD(?=(?:480|576|720|1080|2160)[pi]?\b)",
    ),
    (
        QualitySource::WebDl,
        r"(?i)\b(?:WEB[-_. ]?DL|AmazonHD|iTunesHD|MaxdomeHD|NetflixU?HD|WebHD|HBOMaxHD|DisneyHD|WEB(?![-_. ]?(?:Rip|Mux|Cap)))\b",
    ),
    (QualitySource::WebRip, r"(?i)\b(?:WEB[-_. ]?Rip|WEBMux|WEB[-_. ]?Cap)\b"),
    (
        QualitySource::RawHd,
        r"(?i)\b(?:RawHD|Raw[-_. ]HD|1080i[-_. ]HDTV|MPEG[-_. ]?2)\b",
    ),
    (
        QualitySource::Tv,
        r"(?i)\b(?:HDTV|PDTV|SDTV|TVRip|TV[-_. ]Rip|DSR|DSRip|DTHRip|DVBRip)\b",
    ),
    (
        QualitySource::Dvd,
        r"(?i)\b(?:DVD(?:Rip|Mux|R|9|5|SCR)?|DVD-R|NTSC|PAL|R5|SCREENER)\b",
    ),
    (
        QualitySource::Cam,
        r"(?i)\b(?:CAM|HDCAM|CAMRip|TELESYNC|HDTS|TELECINE|HDTC|WORKPRINT|(?-i:TS|TC))\b",
    ),
];

/// Resolution patterns, highest first.
const RESOLUTION_PATTERNS: [(QualityResolution, &str); 7] = [
    (
        QualityResolution::R2160p,
        r"(?i)(?:\b|(?<=bd))(?:2160[pi]|3840x2160|4096x2160)\b|\b(?:4K[-_. ]?UHD|UHD[-_. ]?4K)\b",
    ),
    (
        QualityResolution::R1080p,
        r"(?i)(?:\b|(?<=bd))(?:1080[pi]|1920x1080)\b|\bFHD\b",
    ),
    (
        QualityResolution::R720p,
        r"(?i)(?:\b|(?<=bd))(?:720[pi]|1280x720|960p)\b",
    ),
    (QualityResolution::R576p, r"(?i)(?:\b|(?<=bd))576[pi]\b"),
    (QualityResolution::R540p, r"(?i)\b540[pi]\b"),
    (
        QualityResolution::R480p,
        r"(?i)(?:\b|(?<=bd))(?:480[pi]|640x480|848x480)\b",
    ),
    (QualityResolution::R360p, r"(?i)\b360p\b"),
];

pub static LANGUAGES: LazyLock<Vec<(Language, Regex)>> = LazyLock::new(|| {
    Language::ALL
        .into_iter()
        .filter_map(|language| {
            language_pattern(language).map(|pattern| (language, Regex::new(pattern).unwrap()))
        })
        .collect()
});

pub static STREAMING_PROVIDERS: LazyLock<Vec<(StreamingProvider, FancyRegex)>> =
    LazyLock::new(|| {
        StreamingProvider::ALL
            .into_iter()
            .map(|provider| {
                (
                    provider,
                    FancyRegex::new(streaming_provider_pattern(provider)).unwrap(),
                )
            })
            .collect()
    });

pub static QUALITY_SOURCES: LazyLock<Vec<(QualitySource, FancyRegex)>> = LazyLock::new(|| {
    SOURCE_PATTERNS
        .into_iter()
        .map(|(source, pattern)| (source, FancyRegex::new(pattern).unwrap()))
        .collect()
});

pub static QUALITY_RESOLUTIONS: LazyLock<Vec<(QualityResolution, FancyRegex)>> =
    LazyLock::new(|| {
        RESOLUTION_PATTERNS
            .into_iter()
            .map(|(resolution, pattern)| (resolution, FancyRegex::new(pattern).unwrap()))
            .collect()
    });

/// Groups that only publish one kind of source but never tag it.
/// Keys are lower case.
pub static EDGE_CASE_RELEASE_GROUP_SOURCES: phf::Map<&'static str, QualitySource> = phf_map! {
    "subsplease" => QualitySource::WebDl,
    "horriblesubs" => QualitySource::WebDl,
    "erai-raws" => QualitySource::WebDl,
};

/// Look up the implied source of a release group (case-insensitive).
pub fn edge_case_source(group: &str) -> Option<QualitySource> {
    EDGE_CASE_RELEASE_GROUP_SOURCES
        .get(group.to_lowercase().as_str())
        .copied()
}

/// Known media container extensions, lower case with the leading dot.
pub static MEDIA_FILE_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    ".webm", ".m4v", ".3gp", ".nsv", ".ty", ".strm", ".rm", ".rmvb", ".m3u",
    ".ifo", ".mov", ".qt", ".divx", ".xvid", ".bivx", ".nrg", ".pva", ".wmv",
    ".asf", ".asx", ".ogm", ".ogv", ".m2v", ".avi", ".bin", ".dat", ".dvr-ms",
    ".mpg", ".mpeg", ".mp4", ".avc", ".vp3", ".svq3", ".nuv", ".viv", ".dv",
    ".fli", ".flv", ".wpl", ".img", ".iso", ".vob", ".mkv", ".ts", ".wtv",
    ".m2ts",
};

/// Extensions of Usenet posting artifacts.
pub static USENET_FILE_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    ".par2", ".nzb",
};

/// Whether an extension (with dot, any case) is stripped from release titles.
pub fn is_removable_extension(extension: &str) -> bool {
    let lower = extension.to_lowercase();
    MEDIA_FILE_EXTENSIONS.contains(lower.as_str()) || USENET_FILE_EXTENSIONS.contains(lower.as_str())
}
