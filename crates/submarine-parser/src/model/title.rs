//! Result of the title grammar, before quality and language detection.

/// Title information of an episodic release.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesTitleMetadata {
    pub main_title: String,
    pub aliases: Vec<String>,
    pub seasons: Vec<u32>,
    pub episodes: Vec<u32>,
    pub absolute_episodes: Vec<u32>,
    /// Fractional absolute numbers such as `12.5`.
    pub special_absolute_episodes: Vec<f64>,
    pub special: bool,
    pub air_date: Option<chrono::NaiveDate>,
    pub year: Option<u16>,
    pub group: Option<String>,
    pub hash: Option<String>,
}

/// Title information of a movie release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieTitleMetadata {
    pub main_title: String,
    pub aliases: Vec<String>,
    pub year: Option<u16>,
    pub group: Option<String>,
    pub hash: Option<String>,
    pub edition: Option<String>,
}

/// Output of the title grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum TitleMetadata {
    Series(SeriesTitleMetadata),
    Movie(MovieTitleMetadata),
}

impl TitleMetadata {
    pub fn main_title(&self) -> &str {
        match self {
            TitleMetadata::Series(series) => &series.main_title,
            TitleMetadata::Movie(movie) => &movie.main_title,
        }
    }

    pub fn aliases(&self) -> &[String] {
        match self {
            TitleMetadata::Series(series) => &series.aliases,
            TitleMetadata::Movie(movie) => &movie.aliases,
        }
    }

    pub fn year(&self) -> Option<u16> {
        match self {
            TitleMetadata::Series(series) => series.year,
            TitleMetadata::Movie(movie) => movie.year,
        }
    }

    /// Group found by the grammar itself, usually an anime subgroup.
    pub fn group(&self) -> Option<&str> {
        match self {
            TitleMetadata::Series(series) => series.group.as_deref(),
            TitleMetadata::Movie(movie) => movie.group.as_deref(),
        }
    }

    pub fn hash(&self) -> Option<&str> {
        match self {
            TitleMetadata::Series(series) => series.hash.as_deref(),
            TitleMetadata::Movie(movie) => movie.hash.as_deref(),
        }
    }

    pub fn is_series(&self) -> bool {
        matches!(self, TitleMetadata::Series(_))
    }
}
