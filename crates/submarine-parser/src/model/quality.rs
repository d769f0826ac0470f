//! Quality types: source, resolution and revision.

use std::cmp::Ordering;

use crate::ParseError;

/// Source medium of a release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum QualitySource {
    /// No source token was found
    #[default]
    Unknown,
    /// Cam, telesync, telecine or workprint
    Cam,
    /// Television capture (HDTV, PDTV, SDTV)
    Tv,
    /// DVD and DVD rips
    Dvd,
    /// Raw broadcast transport streams
    RawHd,
    /// Re-encoded web capture
    WebRip,
    /// Untouched web download
    WebDl,
    /// BluRay encode
    Bluray,
    /// Untouched BluRay stream remuxed into a container
    BlurayRemux,
    /// Full BluRay disc structure or image
    BlurayDisk,
}

impl QualitySource {
    /// Human readable name used in quality names.
    pub fn display_name(&self) -> &'static str {
        match self {
            QualitySource::Unknown => "UNKNOWN",
            QualitySource::Cam => "CAM",
            QualitySource::Tv => "TV",
            QualitySource::Dvd => "DVD",
            QualitySource::RawHd => "RAW_HD",
            QualitySource::WebRip => "WEBRip",
            QualitySource::WebDl => "WebDL",
            QualitySource::Bluray => "BluRay",
            QualitySource::BlurayRemux => "BluRay Remux",
            QualitySource::BlurayDisk => "BluRay Disc",
        }
    }

    /// Resolutions this source is published in.
    ///
    /// An empty slice means the source has no fixed resolution ladder.
    pub fn allowed_resolutions(&self) -> &'static [QualityResolution] {
        use QualityResolution::*;

        match self {
            QualitySource::Tv | QualitySource::WebRip | QualitySource::WebDl => {
                &[R480p, R720p, R1080p, R2160p]
            }
            QualitySource::Bluray => &[R480p, R576p, R720p, R1080p, R2160p],
            QualitySource::BlurayRemux | QualitySource::BlurayDisk => &[R720p, R1080p, R2160p],
            QualitySource::Unknown
            | QualitySource::Cam
            | QualitySource::Dvd
            | QualitySource::RawHd => &[],
        }
    }

    /// Whether the source comes from a streaming service.
    pub fn is_web(&self) -> bool {
        matches!(self, QualitySource::WebDl | QualitySource::WebRip)
    }
}

impl std::fmt::Display for QualitySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for QualitySource {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "unknown" => Ok(QualitySource::Unknown),
            "cam" => Ok(QualitySource::Cam),
            "tv" | "hdtv" => Ok(QualitySource::Tv),
            "dvd" => Ok(QualitySource::Dvd),
            "rawhd" => Ok(QualitySource::RawHd),
            "webrip" => Ok(QualitySource::WebRip),
            "webdl" => Ok(QualitySource::WebDl),
            "bluray" => Ok(QualitySource::Bluray),
            "blurayremux" | "remux" => Ok(QualitySource::BlurayRemux),
            "bluraydisk" | "bluraydisc" => Ok(QualitySource::BlurayDisk),
            _ => Err(ParseError::format(format!("unknown quality source: {}", s))),
        }
    }
}

/// Vertical video resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QualityResolution {
    #[cfg_attr(feature = "serde", serde(rename = "R360_P"))]
    R360p,
    #[cfg_attr(feature = "serde", serde(rename = "R480_P"))]
    R480p,
    #[cfg_attr(feature = "serde", serde(rename = "R540_P"))]
    R540p,
    #[cfg_attr(feature = "serde", serde(rename = "R576_P"))]
    R576p,
    #[cfg_attr(feature = "serde", serde(rename = "R720_P"))]
    R720p,
    #[cfg_attr(feature = "serde", serde(rename = "R1080_P"))]
    R1080p,
    #[cfg_attr(feature = "serde", serde(rename = "R2160_P"))]
    R2160p,
}

impl QualityResolution {
    /// Height in lines.
    pub fn height(&self) -> u16 {
        match self {
            QualityResolution::R360p => 360,
            QualityResolution::R480p => 480,
            QualityResolution::R540p => 540,
            QualityResolution::R576p => 576,
            QualityResolution::R720p => 720,
            QualityResolution::R1080p => 1080,
            QualityResolution::R2160p => 2160,
        }
    }
}

impl std::fmt::Display for QualityResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}p", self.height())
    }
}

/// A source together with an optional resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityResolutionModel {
    pub source: QualitySource,
    pub resolution: Option<QualityResolution>,
}

impl QualityResolutionModel {
    pub fn new(source: QualitySource, resolution: Option<QualityResolution>) -> Self {
        Self { source, resolution }
    }

    /// Every source/resolution combination, following each source's allowed resolutions.
    pub fn all() -> Vec<QualityResolutionModel> {
        [
            QualitySource::Unknown,
            QualitySource::Cam,
            QualitySource::Tv,
            QualitySource::Dvd,
            QualitySource::RawHd,
            QualitySource::WebRip,
            QualitySource::WebDl,
            QualitySource::Bluray,
            QualitySource::BlurayRemux,
            QualitySource::BlurayDisk,
        ]
        .into_iter()
        .flat_map(|source| {
            let allowed = source.allowed_resolutions();
            if allowed.is_empty() {
                vec![QualityResolutionModel::new(source, None)]
            } else {
                allowed
                    .iter()
                    .map(|resolution| QualityResolutionModel::new(source, Some(*resolution)))
                    .collect()
            }
        })
        .collect()
    }

    /// Display name, e.g. `WebDL-1080p` or `DVD`.
    pub fn name(&self) -> String {
        match self.resolution {
            Some(resolution) => format!("{}-{}", self.source.display_name(), resolution),
            None => self.source.display_name().to_string(),
        }
    }

    /// Whether the resolution belongs to the source's published ladder.
    pub fn is_allowed(&self) -> bool {
        match self.resolution {
            Some(resolution) => self.source.allowed_resolutions().contains(&resolution),
            None => true,
        }
    }
}

/// Revision markers of a re-release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Revision {
    pub version: u32,
    pub is_repack: bool,
    pub is_proper: bool,
    pub is_real: bool,
}

impl Default for Revision {
    fn default() -> Self {
        Self {
            version: 1,
            is_repack: false,
            is_proper: false,
            is_real: false,
        }
    }
}

impl Revision {
    /// Compare two revisions by version only; flags do not take part.
    pub fn compare(&self, other: &Revision) -> Ordering {
        self.version.cmp(&other.version)
    }

    /// Whether this revision supersedes `other`.
    pub fn is_newer_than(&self, other: &Revision) -> bool {
        self.compare(other) == Ordering::Greater
    }
}

/// Full quality description of a release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityModel {
    pub resolution: QualityResolutionModel,
    pub revision: Revision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_name() {
        let model = QualityResolutionModel::new(QualitySource::WebDl, Some(QualityResolution::R1080p));
        assert_eq!(model.name(), "WebDL-1080p");

        let model = QualityResolutionModel::new(QualitySource::Dvd, None);
        assert_eq!(model.name(), "DVD");

        let model =
            QualityResolutionModel::new(QualitySource::BlurayRemux, Some(QualityResolution::R2160p));
        assert_eq!(model.name(), "BluRay Remux-2160p");
    }

    #[test]
    fn test_allowed_resolutions() {
        assert!(QualityResolutionModel::new(QualitySource::Bluray, Some(QualityResolution::R576p))
            .is_allowed());
        assert!(
            !QualityResolutionModel::new(QualitySource::WebDl, Some(QualityResolution::R576p))
                .is_allowed()
        );
        assert!(QualitySource::Cam.allowed_resolutions().is_empty());
    }

    #[test]
    fn test_all_quality_models() {
        let all = QualityResolutionModel::all();
        // 4 sources without a ladder, 3 x 4 web/tv, 5 bluray, 2 x 3 remux/disc
        assert_eq!(all.len(), 4 + 12 + 5 + 6);
        assert!(all.iter().all(QualityResolutionModel::is_allowed));
    }

    #[test]
    fn test_revision_compares_version_only() {
        let proper = Revision {
            is_proper: true,
            ..Revision::default()
        };
        let v2 = Revision {
            version: 2,
            ..Revision::default()
        };

        assert_eq!(proper.compare(&Revision::default()), Ordering::Equal);
        assert_ne!(proper, Revision::default());
        assert!(v2.is_newer_than(&proper));
        assert!(!proper.is_newer_than(&v2));
    }

    #[test]
    fn test_source_from_str() {
        assert_eq!("WEB-DL".parse::<QualitySource>().unwrap(), QualitySource::WebDl);
        assert_eq!("bluray_remux".parse::<QualitySource>().unwrap(), QualitySource::BlurayRemux);
        assert!("vhs".parse::<QualitySource>().is_err());
    }
}
