//! Ordered title pattern tables.
//!
//! Patterns are tried top to bottom and the first one yielding a non-blank
//! title wins, so the order of each table is significant.
//!
//! Capture group conventions:
//! - `title`, `subgroup`, `hash`, `titleyear`, `year`, `edition`
//! - `season`, `episode`, `absoluteepisode` hold single numbers; a trailing
//!   digit (`season2`) marks a second occurrence of the same kind
//! - `episodes`, `absoluteepisodes`, `seasonepisodes`, `joinedepisodes` wrap
//!   a repeated section that is re-lexed by [`crate::lexer`]
//! - `airyear`, `airmonth`, `airday` form a daily air date
//! - `special` flags OVA/OVD/special releases

use std::sync::LazyLock;

use fancy_regex::Regex as FancyRegex;

/// Edition tag shared by the edition-aware movie patterns.
macro_rules! edition {
    () => {
        r"\(?\b(?<edition>(?:(?:(?:Recut.|Extended.|Ultimate.)?(?:Director.?s|Collector.?s|Theatrical|Ultimate|Extended|Despecialized|(?:Special|Rouge|Final|Assembly|Imperial|Diamond|Signature|Hunter|Rekall)(?=(?:.(?:Cut|Edition|Version)))|\d{2,3}(?:th)?.Anniversary)(?:.(?:Cut|Edition|Version))?(?:.(?:Extended|Uncensored|Remastered|Unrated|Uncut|IMAX|Fan.?Edit))?|(?:(?:Uncensored|Remastered|Unrated|Uncut|IMAX|Fan.?Edit|Restored|(?:(?:2|3|4)in1))))))\b\)?"
    };
}

/// Quick check for an `S01`/`S01E02` token, which rules out movie parsing.
pub static SERIES_INFORMATION: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?i)[-. _](S\d+(?:E\d+)?)[-. _]").unwrap());

/// `Title (AKA Other)` written with brackets.
pub static BRACKETED_ALTERNATIVE_TITLE: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?i)(.*) \([ ]*AKA[ ]+(.*)\)").unwrap());

/// Separator between alternative titles.
pub static ALTERNATIVE_TITLE: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?i)[ .]+AKA[ .]+").unwrap());

const MOVIE_PATTERN_SOURCES: [&str; 10] = [
    // Anime [Subgroup] and Year
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)(?<title>(?![(\[]).+?)?(?:(?:[-_\W](?<![)\[!]))*(?<year>(?:1(?:8|9)|20)\d{2}(?!p|i|x|\d|\]|\W\d)))+.*?(?<hash>\[\w{8}\])?(?:$|\.)",
    // Anime [Subgroup] no year, versioned title, hash
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)(?<title>(?![(\[]).+?)(?:v\d{1,2}[-_. ])(?:\[.*)?(?:[\[(][^\])])?.*?(?<hash>\[\w{8}\])(?:$|\.)",
    // Anime [Subgroup] no year, info in double sets of brackets, hash
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)(?<title>(?![(\[]).+?)(?:\[.*).*?(?<hash>\[\w{8}\])(?:$|\.)",
    // Anime [Subgroup] no year, info in parentheses or brackets, hash
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)(?<title>(?![(\[]).+)(?:[\[(][^\])]).*?(?<hash>\[\w{8}\])(?:$|\.)",
    // Some german or french tracker formats (missing year, ...)
    concat!(
        r"(?i)^(?!.*?(?:19|20)\d{2}.*?(?:German|TrueFrench))(?<title>(?![(\[]).+?)(?:\W|_)(?:",
        edition!(),
        r".{1,3})?(?:German|TrueFrench)(?:.+?)(?=(?:(?:19|20)\d{2}|$))(?<year>(?:19|20)\d{2}(?!p|i|\d|\]|\W\d))?(?:\W+|_|$)(?!\\)"
    ),
    // Special, despecialized, etc. edition movies
    concat!(
        r"(?i)^(?<title>(?![(\[]).+?)?(?:(?:[-_\W](?<![)\[!]))*",
        edition!(),
        r".{1,3}(?<year>(?:1(?:8|9)|20)\d{2}(?!p|i|\d|\]|\W\d)))+(?:\W+|_|$)(?!\\)"
    ),
    // Normal movie format, e.g. Movie.Title.2012.DVDRip.x264
    r"(?i)^(?<title>(?![(\[]).+?)?(?:(?:[-_\W](?<![)\[!]))*(?<year>(?:1(?:8|9)|20)\d{2}(?!p|i|(?:1(?:8|9)|20)\d{2}|\]|\W(?:1(?:8|9)|20)\d{2})))+(?:\W+|_|$)(?!\\)",
    // PassThePopcorn torrent names: Movie.Title.[2012].DVDRip
    r"(?i)^(?<title>.+?)?(?:(?:[-_\W](?<![()\[!]))*(?<year>(?:\[\w *\])))+(?:\W+|_|$)(?!\\)",
    // Year in brackets
    r"(?i)^(?<title>(?![(\[]).+?)?(?:(?:[-_\W](?<![)!]))*(?<year>(?:1(?:8|9)|20)\d{2}(?!p|i|\d|\W\d)))+(?:\W+|_|$)(?!\\)",
    // As a last resort for movies that have ( or [ in their title
    r"(?i)^(?<title>.+?)?(?:(?:[-_\W](?<![)\[!]))*(?<year>(?:1(?:8|9)|20)\d{2}(?!p|i|\d|\]|\W\d)))+(?:\W+|_|$)(?!\\)",
];

// Year-first folder names, e.g. `2019 Movie Title`
const MOVIE_FOLDER_PATTERN_SOURCE: &str =
    r"^(?:(?:[-_\W](?<![)!]))*(?<year>(?:19|20)\d{2}(?!p|i|\d|\W\d)))+(?:\W+|_|$)(?<title>.+?)?$";

const SERIES_PATTERN_SOURCES: [&str; 77] = [
    // Daily episode with year in series title and air time after date (Plex DVR format)
    r"(?i)^(?<title>.+?\((?<titleyear>\d{4})\))[-_. ]+(?<airyear>19[4-9]\d|20\d\d)(?<sep>[-_]?)(?<airmonth>0\d|1[0-2])\k<sep>(?<airday>[0-2]\d|3[01])[-_. ]\d{2}[-_. ]\d{2}[-_. ]\d{2}",
    // Daily episodes without title (2018-10-12, 20181012)
    r"(?i)^(?<airyear>19[6-9]\d|20\d\d)(?<sep>[-_]?)(?<airmonth>0\d|1[0-2])\k<sep>(?<airday>[0-2]\d|3[01])(?!\d)",
    // Multi-part episodes without a title (S01E05.S01E06)
    r"(?i)^(?<seasonepisodes>(?:\W*S(?<!\d)(?:\d{1,2}|\d{4})(?!\d)(?:e{1,2}\d{1,3}(?!\d))+){2,})",
    // Multi-part episodes without a title (1x05.1x06)
    r"(?i)^(?<seasonepisodes>(?:\W*(?<!\d)(?:\d{1,2}|\d{4})(?!\d)(?:x{1,2}\d{1,3}(?!\d))+){2,})",
    // Episodes without a title, multi (S01E04E05, 1x04x05, etc)
    r"(?i)^(?:S?(?<season>(?<!\d)(?:\d{1,2}|\d{4})(?!\d))(?<episodes>(?:(?:[-_]|[ex]){1,2}\d{2,3}(?!\d)){2,}))",
    // Episodes without a title, single (S01E05, 1x05)
    r"(?i)^(?:S?(?<season>(?<!\d)(?:\d{1,2}|\d{4})(?!\d))(?:(?:[-_ ]?[ex])(?<episode>\d{2,3}(?!\d))))",
    // Anime, Subgroup and Title, Episode + Absolute Episode Number
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)(?<title>.+?)[-_. ](?:Episode)(?<absoluteepisodes>(?:[-_. ]+(?<!\d)\d{2,3}(?:\.\d{1,2})?(?!\d))+)(?:_|-|\s|\.)*?(?<hash>\[.{8}\])?(?:$|\.)?",
    // Anime [Subgroup] Title Absolute Episode Number + Season+Episode
    r"(?i)^(?:\[(?<subgroup>.+?)\](?:_|-|\s|\.)?)(?<title>.+?)(?<absoluteepisodes>(?:(?:[-_\W](?<![()\[!]))+\d{2,3}(?:\.\d{1,2})?)+)(?:_|-|\s|\.)+(?:S?(?<season>(?<!\d)\d{1,2}(?!\d))(?<episodes>(?:(?:\-|[ex]|\W[ex]){1,2}\d{2}(?!\d))+)).*?(?<hash>[(\[]\w{8}[)\]])?(?:$|\.)",
    // Anime [Subgroup] Title Season+Episode + Absolute Episode Number
    r"(?i)^(?:\[(?<subgroup>.+?)\](?:_|-|\s|\.)?)(?<title>.+?)(?:[-_\W](?<![()\[!]))+(?:S?(?<season>(?<!\d)\d{1,2}(?!\d))(?<episodes>(?:(?:\-|[ex]|\W[ex]){1,2}\d{2}(?!\d))+))(?<absoluteepisodes>(?:(?:_|-|\s|\.)+(?<!\d)\d{2,3}(?:\.\d{1,2})?(?!\d|\-[a-z]))+).*?(?<hash>\[\w{8}\])?(?:$|\.)",
    // Anime [Subgroup] Title Season+Episode
    r"(?i)^(?:\[(?<subgroup>.+?)\](?:_|-|\s|\.)?)(?<title>.+?)(?:[-_\W](?<![()\[!]))+(?:S?(?<season>(?<!\d)\d{1,2}(?!\d))(?<episodes>(?:(?:[ex]|\W[ex]){1,2}\d{2}(?!\d))+))(?:\s|\.).*?(?<hash>\[\w{8}\])?(?:$|\.)",
    // Anime [Subgroup] Title with trailing number, Absolute Episode batch (01 ~ 12)
    r"(?i)^\[(?<subgroup>.+?)\][-_. ]?(?<title>.+?[^-]+?)(?:(?<![-_. ])(?<!\b0\d)(?<!\b0\d{2})(?<!\b0\d{3}) - )[-_. ]?(?<absoluteepisode>\d{2,3}(?:\.\d{1,2})?(?!\d))\s?~\s?(?<absoluteepisode2>\d{2,3}(?:\.\d{1,2})?(?!\d))(?:[-_. ]+(?<special>special|ova|ovd))?.*?(?<hash>\[\w{8}\])?(?:$|\.mkv)",
    // Anime [Subgroup] Title (Season N) Absolute Episode Number
    r"(?i)^\[(?<subgroup>.+?)\][-_. ]?(?<title>[^-]+?)[_. ]+?\(Season[_. ](?<season>\d+)\)[-_. ]+?(?<absoluteepisodes>(?:[-_. ]?\d{2,3}(?:\.\d{1,2})?(?!\d))+)(?:[-_. ]+(?<special>special|ova|ovd))?.*?(?<hash>\[\w{8}\])?(?:$|\.mkv)",
    // Anime [Subgroup] Title - Absolute Episode Number
    r"(?i)^\[(?<subgroup>.+?)\][-_. ]?(?<title>[^-]+?)(?:(?<![-_. ])(?<!\b0\d)(?<!\b0\d{2})(?<!\b0\d{3}) - )(?<absoluteepisodes>(?:[-_. ]?\d{2,3}(?:\.\d{1,2})?(?!\d))+)(?:[-_. ]+(?<special>special|ova|ovd))?.*?(?<hash>\[\w{8}\])?(?:$|\.mkv)",
    // Anime [Subgroup] Title Absolute Episode Number (three digits, no dash)
    r"(?i)^\[(?<subgroup>.+?)\][-_. ]?(?<title>[^-]+?)(?:(?<![-_. ])(?<!\b0\d)(?<!\b0\d{2})(?<!\b0\d{3})[_ ]+)(?<absoluteepisodes>(?:[-_. ]?\d{3}(?:\.\d{1,2})?(?!\d|-[a-z]))+)(?:[-_. ]+(?<special>special|ova|ovd))?.*?(?<hash>\[\w{8}\])?(?:$|\.mkv)",
    // Anime [Subgroup] Title with trailing number - Absolute Episode Number
    r"(?i)^\[(?<subgroup>.+?)\][-_. ]?(?<title>.+?)(?<!\b0\d)(?<!\b0\d{2})(?<!\b0\d{3})(?<absoluteepisodes>(?:[. ]-[. ]\d{2,3}(?:\.\d{1,2})?(?!\d|[-]))+)(?:[-_. ]+(?<special>special|ova|ovd))?.*?(?<hash>\[\w{8}\])?(?:$|\.mkv)",
    // Anime [Subgroup] Title Absolute Episode Number - Absolute Episode Number
    r"(?i)^\[(?<subgroup>.+?)\][-_. ]?(?<title>.+?)(?<!\b0\d)(?<!\b0\d{2})(?<!\b0\d{3})(?<absoluteepisode>\d{2,3}(?:\.\d{1,2})?(?!\d|[-]))[. ]-[. ](?<absoluteepisode2>\d{2,3}(?:\.\d{1,2})?(?!\d|[-]))(?:[-_. ]+(?<special>special|ova|ovd))?.*?(?<hash>\[\w{8}\])?(?:$|\.mkv)",
    // Anime [Subgroup] Title Absolute Episode Number
    r"(?i)^\[(?<subgroup>.+?)\][-_. ]?(?<title>.+?)[-_. ]+\(?(?<absoluteepisodes>(?:[-_. ]?#?\d{2,3}(?:\.\d{1,2})?(?!\d|-[a-z]))+)\)?(?:[-_. ]+(?<special>special|ova|ovd))?.*?(?<hash>\[\w{8}\])?(?:$|\.mkv)",
    // Multi-episode repeated (S01E05 - S01E06)
    r"(?i)^(?<title>.+?)(?<seasonepisodes>(?:(?:[-_\W](?<![()\[!]))+S(?<!\d)(?:\d{1,2}|\d{4})(?!\d)(?:(?:e|[-_. ]e){1,2}\d{1,3}(?!\d))+){2,})",
    // Multi-episode repeated (1x05 - 1x06)
    r"(?i)^(?<title>.+?)(?<seasonepisodes>(?:(?:[-_\W](?<![()\[!]))+(?<!\d)(?:\d{1,2}|\d{4})(?!\d)(?:x{1,2}\d{1,3}(?!\d))+){2,})",
    // Single episodes with a title (S01E05, 1x05, etc) and trailing info in slashes
    r"(?i)^(?<title>.+?)(?:(?:[-_\W](?<![()\[!]))+S?(?<season>(?<!\d)(?:\d{1,2})(?!\d))(?:[ex]|\W[ex]|_){1,2}(?<episode>\d{2,3}(?!\d|(?:[ex]|\W[ex]|_|-){1,2}\d))).+?(?:\[.+?\])(?!\\)",
    // Anime Title Season Episode Year, with optional alias in brackets
    r"(?i)^(?<title>.+?)[-_. ](?<alias>\(.+?\))?[-_. ]?(?:S?(?<season>(?<!\d)(?:\d{1,2}|\d{4})(?!\d))(?:(?:[-_ ]?[ex])(?<episode>\d{2,3}(?!\d)))?)[-_. ](?<titleyear>\d{4})[-_. ]",
    // Anime Title Season+Episode + Absolute Episode Number [SubGroup]
    r"(?i)^(?<title>.+?)(?:[-_\W](?<![()\[!]))+(?:S?(?<season>(?<!\d)\d{1,2}(?!\d))(?<episodes>(?:(?:[ex]|\W[ex]|-){1,2}(?<!\d)\d{2}(?!\d))+))[-_. (]+?(?<absoluteepisodes>(?:[-_. ]?(?<!\d)\d{3}(?:\.\d{1,2})?(?!\d|[pi]))+).+?\[(?<subgroup>.+?)\](?:$|\.mkv)",
    // Multi-episode with a title (S01E05E06, S01E05-06, S01E05 E06, etc) and trailing info in slashes
    r"(?i)^(?<title>.+?)(?:(?:[-_\W](?<![()\[!]))+S?(?<season>(?<!\d)(?:\d{1,2})(?!\d))(?:[ex]|\W[ex]|_){1,2}(?<episode>\d{2,3}(?!\d))(?<episodes>(?:(?:\-|[ex]|\W[ex]|_){1,2}\d{2,3}(?!\d))+)).+?(?:\[.+?\])(?!\\)",
    // Anime Title Episode Absolute Episode Number [SubGroup]
    r"(?i)^(?<title>.+?)[-_. ]Episode(?<absoluteepisodes>(?:[-_. ]+\d{2,3}(?:\.\d{1,2})?(?!\d))+)(?:.+?)\[(?<subgroup>.+?)\].*?(?<hash>\[\w{8}\])?(?:$|\.)",
    // Anime Title Absolute Episode Number with decimal [SubGroup]
    r"(?i)^(?<title>.+?)(?<absoluteepisodes>(?:(?:_|-|\s|\.)+\d{3}\.\d{1,2}(?!\d))+)(?:.+?)\[(?<subgroup>.+?)\].*?(?<hash>\[\w{8}\])?(?:$|\.)",
    // Anime Title Absolute Episode Number (Year) [SubGroup]
    r"(?i)^(?<title>.+?)[-_. ]+(?<absoluteepisode>(?<!\d)\d{2}(?!\d))[-_. ](?:\(\d{4}\))[-_. ]\[(?<subgroup>.+?)\]",
    // Anime Title Absolute Episode Number [Hash]
    r"(?i)^(?<title>.+?)(?<absoluteepisodes>(?:(?:_|-|\s|\.)+\d{2,3}(?:\.\d{1,2})?(?!\d))+)(?:[-_. ]+(?<special>special|ova|ovd))?[-_. ]+.*?(?<hash>\[\w{8}\])(?:$|\.)",
    // Episodes with airdate AND season/episode number, capture season/episode only
    r"(?i)^(?<title>.+?)?\W*(?<airdate>\d{4}\W+[0-1][0-9]\W+[0-3][0-9])(?!\W+[0-3][0-9])[-_. ](?:s?(?<season>(?<!\d)(?:\d{1,2})(?!\d)))(?:[ex](?<episode>(?<!\d)(?:\d{1,3})(?!\d)))",
    // Episodes with airdate AND season/episode number
    r"(?i)^(?<title>.+?)?\W*(?<airyear>\d{4})\W+(?<airmonth>[0-1][0-9])\W+(?<airday>[0-3][0-9])(?!\W+[0-3][0-9]).+?(?:s?(?<season>(?<!\d)(?:\d{1,2})(?!\d)))(?:[ex](?<episode>(?<!\d)(?:\d{1,3})(?!\d)))",
    // Multi-episode with a title and a dash range (S01E05-06)
    r"(?i)^(?<title>.+?)(?:[-_\W](?<![()\[!]))+S(?<season>(?<!\d)(?:\d{1,2})(?!\d))E(?<episode>\d{1,2}(?!\d))(?<episodes>(?:-\d{1,2}(?!\d))+)(?:[-_. ]|$)",
    // Multi-episode with a title (S01E05E06, S01E05-06, S01E05 E06, etc)
    r"(?i)^(?<title>.+?)(?:(?:[-_\W](?<![()\[!]))+S?(?<season>(?<!\d)(?:\d{1,2})(?!\d))(?:[ex]|\W[ex]){1,2}(?<episode>\d{2,3}(?!\d))(?<episodes>(?:(?:\-|[ex]|\W[ex]|_){1,2}\d{2,3}(?!\d))*))\W?(?!\\)",
    // Four digit season with episode (S2010E05)
    r"(?i)^(?<title>.+?)(?:(?:[-_\W](?<![()\[!]))+S(?<season>(?<!\d)(?:\d{4})(?!\d))(?:e|\We|_){1,2}(?<episode>\d{2,4}(?!\d))(?<episodes>(?:(?:\-|e|\We|_){1,2}\d{2,3}(?!\d))*))\W?(?!\\)",
    // Four digit season with x notation (2010x05)
    r"(?i)^(?<title>.+?)(?:(?:[-_\W](?<![()\[!]))+(?<season>(?<!\d)(?:\d{4})(?!\d))(?:x|\Wx){1,2}(?<episode>\d{2,4}(?!\d))(?<episodes>(?:(?:\-|x|\Wx|_){1,2}\d{2,3}(?!\d))*))\W?(?!\\)",
    // Multi-season pack
    r"(?i)^(?<title>.+?)[-_. ]+(?:S|Season[_. ]|Saison[_. ]|Series[_. ])(?<season>(?<!\d)(?:\d{1,2})(?!\d))(?:-|[-_. ]{3})(?:S|Season[_. ]|Saison[_. ]|Series[_. ])?(?<season2>(?<!\d)(?:\d{1,2})(?!\d))",
    // Partial season pack
    r"(?i)^(?<title>.+?)(?:\W+S(?<season>(?<!\d)(?:\d{1,2})(?!\d))\W+(?:(?:Part\W?|(?<!\d\W)(?<!\d\W\W)(?<!\d\W\W\W)e)(?<seasonpart>\d{1,2}(?!\d)))+)",
    // Anime Title 4-digit Absolute Episode Number [SubGroup]
    r"(?i)^(?<title>.+?)[-_. ]+(?<absoluteepisode>(?<!\d)\d{4}(?!\d))[-_. ]\[(?<subgroup>.+?)\]",
    // Mini-Series with year in title (Part01, E01)
    r"(?i)^(?<title>.+?\d{4})(?<episodes>\W+(?:(?:Part\W?|e)\d{1,2}(?!\d))+)",
    // Mini-Series, episode number and episode range (E01-E02)
    r"(?i)^(?<title>.+?)(?:[-._ ][e])(?<episode>\d{2,3}(?!\d))(?<episodes>(?:(?:\-?[e])\d{2,3}(?!\d))+)",
    // Daily episodes with a part number
    r"(?i)^(?<title>.+?)?\W*(?<airyear>\d{4})[-_. ]+(?<airmonth>[0-1][0-9])[-_. ]+(?<airday>[0-3][0-9])(?![-_. ]+[0-3][0-9])[-_. ]+Part[-_. ]?(?<part>[1-9])",
    // Mini-Series (E01, Part01)
    r"(?i)^(?<title>.+?)(?<episodes>\W+(?:(?:Part\W?|(?<!\d\W)(?<!\d\W\W)(?<!\d\W\W\W)e)\d{1,2}(?!\d))+)",
    // Mini-Series, episode as a word (Part One)
    r"(?i)^(?<title>.+?)(?:\W+(?:Part[-._ ](?<episode>One|Two|Three|Four|Five|Six|Seven|Eight|Nine)(?>[-._ ])))",
    // Mini-Series (1of6)
    r"(?i)^(?<title>.+?)(?:\W+(?<episode>(?<!\d)\d{1,2}(?!\d))of\d+)",
    // Season N Episode M written out
    r#"(?i)(?:.*(?:"|^))(?<title>.*?)(?:[-_\W](?<![()\[]))+(?:\W?Season\W?)(?<season>(?<!\d)\d{1,2}(?!\d))(?:\W|_)+(?:Episode\W)(?<episodes>(?:[-_. ]?(?<!\d)\d{1,2}(?!\d))+)"#,
    // Bracketed multi-episode ([S01E01-E02])
    r"(?i)(?:.*(?:^))(?<title>.*?)[-._ ]+\[S(?<season>(?<!\d)\d{2}(?!\d))(?<episodes>(?:[E-]{1,2}(?<!\d)\d{2}(?!\d))+)\]",
    // Multi-episode without separators (S01E01E02)
    r"(?i)(?:.*(?:^))(?<title>.*?)S(?<season>(?<!\d)\d{2}(?!\d))(?<episodes>(?:E(?<!\d)\d{2}(?!\d))+)",
    // Single or multi-episode with a title (S01.05, S01 05)
    r"(?i)^(?<title>.+?)[-_. ]S(?<season>(?<!\d)(?:\d{1,2}|\d{4})(?!\d))(?<episodes>(?:[-_. ]?[ex]?(?<!\d)\d{1,2}(?!\d))+)",
    // Single episode with a title (S01E05, S01Ep05, S01 E05)
    r#"(?i)(?:.*(?:"|^))(?<title>.*?)(?:\W?|_)S(?<season>(?<!\d)\d{1,2}(?!\d))(?:\W|_)?Ep?[ ._]?(?<episode>(?<!\d)\d{1,2}(?!\d))"#,
    // Three digit season (S010E05)
    r#"(?i)(?:.*(?:"|^))(?<title>.*?)(?:\W?|_)S(?<season>(?<!\d)\d{3}(?!\d))(?:\W|_)?E(?<episode>(?<!\d)\d{1,2}(?!\d))"#,
    // Five digit episode number with a title
    r"(?i)^(?:(?<title>.+?)(?:_|-|\s|\.)+)(?:S?(?<season>(?<!\d)\d{1,2}(?!\d)))(?:(?:\-|[ex]|\W[ex]|_){1,2}(?<episode>(?<!\d)\d{5}(?!\d)))",
    // Five digit multi-episode with a title
    r"(?i)^(?:(?<title>.+?)(?:_|-|\s|\.)+)(?:S?(?<season>(?<!\d)\d{1,2}(?!\d)))(?<episodes>(?:(?:[-_. ]{1,3}ep){1,2}(?<!\d)\d{5}(?!\d))+)",
    // Separated season and episode (S01 - E01)
    r"(?i)^(?<title>.+?)(?:_|-|\s|\.)+S(?<season>\d{2}(?!\d))(?:\W-\W)E(?<episode>(?<!\d)\d{2}(?!\d))(?!\\)",
    // Season and episode in brackets ([1x05])
    r"(?i)^(?<title>.+?)?(?:[-_\W](?<![()\[!]))+\[(?<season>(?<!\d)\d{1,2})(?<episodes>(?:(?:-|x){1,2}\d{2})+)\].+?(?:\.|$)",
    // Anime title with season in title and absolute episode (Title S2 - 12)
    r"(?i)^(?<title>.+?S\d{1,2})[-_. ]{3,}(?:EP)?(?<absoluteepisode>\d{2,3}(?:\.\d{1,2})?(?!\d|[-]))",
    // Anime single digit absolute episode (Episode 1)
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)?(?<title>.+?)[-_. ]+?(?:Episode[-_. ]+?)(?<absoluteepisode>\d{1}(?:\.\d{1,2})?(?!\d))",
    // Anime [Subgroup] 4-digit absolute episode
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)(?<title>.+?)[-_. ]+?(?<absoluteepisode>\d{4}(?:\.\d{1,2})?(?!\d))",
    // Anime [Subgroup] bracketed absolute episode
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)(?<title>.+?)[-_. ]+?\[(?<absoluteepisode>\d{2,3}(?:\.\d{1,2})?(?!\d))\]",
    // Season only releases
    r"(?i)^(?<title>.+?)[-_. ]+?(?:S|Season|Saison|Series)[-_. ]?(?<season>\d{1,2}(?![-_. ]?\d))(?:[-_. ]|$)+(?<extras>EXTRAS|SUBPACK)?(?!\\)",
    // Four digit season only releases
    r"(?i)^(?<title>.+?)[-_. ]+?(?:S|Season|Saison|Series)[-_. ]?(?<season>\d{4}(?![-_. ]?\d))(?:\W+|_|$)(?<extras>EXTRAS|SUBPACK)?(?!\\)",
    // Episodes with a title and season/episode in square brackets
    r"(?i)^(?<title>.+?)(?:(?:[-_\W](?<![()\[!]))+\[S?(?<season>(?<!\d)\d{1,2}(?!\d))(?<episodes>(?:(?:\-|[ex]|\W[ex]|_){1,2}(?<!\d)\d{2}(?!\d|i|p))+)\])\W?(?!\\)",
    // Supports 103/113 naming
    r"(?i)^(?<title>.+?)?(?<joinedepisodes>(?:(?:[_.-](?<![()\[!]))+(?<!\d)[1-9](?:[1-9][0-9]|[0][1-9])(?![a-z]|\d))+)(?:[_.]|$)",
    // Four digit episode number, no title (S01E1234)
    r"(?i)^(?:S?(?<season>(?<!\d)\d{1,2}(?!\d))(?<episodes>(?:(?:\-|[ex]|\W[ex]|_){1,2}\d{4}(?!\d|i|p))+))(?:\W+|_|$)(?!\\)",
    // Four digit episode number with a title
    r"(?i)^(?<title>.+?)(?:(?:[-_\W](?<![()\[!]))+S?(?<season>(?<!\d)\d{1,2}(?!\d))(?<episodes>(?:(?:\-|[ex]|\W[ex]|_){1,2}\d{4}(?!\d|i|p))+))\W?(?!\\)",
    // Daily episodes (2018.10.12)
    r"(?i)^(?<title>.+?)?\W*(?<airyear>\d{4})[-_. ]+(?<airmonth>[0-1][0-9])[-_. ]+(?<airday>[0-3][0-9])(?![-_. ]+[0-3][0-9])",
    // Daily episodes, US date order (10.12.2018)
    r"(?i)^(?<title>.+?)?\W*(?<airmonth>[0-1][0-9])[-_. ]+(?<airday>[0-3][0-9])[-_. ]+(?<airyear>\d{4})(?!\d)",
    // Daily episodes without separators (20181012)
    r"(?i)^(?<title>.+?)?\W*(?<!\d)(?<airyear>\d{4})(?<airmonth>[0-1][0-9])(?<airday>[0-3][0-9])(?!\d)",
    // Supports 1103/1113 naming
    r"(?i)^(?<title>.+?)?(?<joinedepisodes>(?:(?:[-_.](?<![()\[!]))*(?<!\d|\(|\[|e|x)\d{2}(?<!e|x)(?:[1-9][0-9]|[0][1-9])(?!p|i|\d|\)|\]|\W\d|\W(?:e|ep|x)\d))+)(?:[-_.]+|$)(?!\\)",
    // Single digit episode (S1E2, 1x2, 1-2)
    r"(?i)^(?<title>.*?)(?<seasonepisodes>(?:(?:[-_\W](?<![()\[!]))+S?(?<!\d)\d{1,2}(?!\d)(?:(?:\-|[ex]){1,2}\d)+)+)(?:\W+|_|$)(?!\\)",
    // Season N Episode without a title
    r"(?i)^(?:Season(?:_|-|\s|\.)(?<season>(?<!\d)\d{1,2}(?!\d)))(?:_|-|\s|\.)(?<episode>(?<!\d)\d{1,2}(?!\d))",
    // Season-Episode without a title (1-05)
    r"(?i)^(?:(?<season>(?<!\d)(?:\d{1,2})(?!\d))(?:-(?<episode>\d{2,3}(?!\d))))",
    // Anime range with episode marker (ep01-02)
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)?(?<title>.+?)(?:_|\s|\.)+(?:e|ep)(?<absoluteepisode>\d{2,3}(?:\.\d{1,2})?)-(?<absoluteepisode2>(?<!\d)\d{1,2}(?:\.\d{1,2})?(?!\d|-)).*?(?<hash>\[\w{8}\])?(?:$|\.)",
    // Anime episode marker (ep01, e1234)
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)?(?<title>.+?)(?<absoluteepisodes>(?:(?:_|-|\s|\.)+(?:e|ep)\d{2,4}(?:\.\d{1,2})?)+)[-_. ].*?(?<hash>\[\w{8}\])?(?:$|\.)",
    // Anime Title Episode Absolute Episode Number
    r"(?i)^(?<title>.+?)[-_. ](?:Episode)(?<absoluteepisodes>(?:[-_. ]+(?<!\d)\d{2,3}(?:\.\d{1,2})?(?!\d))+)(?:_|-|\s|\.)*?(?<hash>\[.{8}\])?(?:$|\.)?",
    // Anime Title Absolute Episode range (1-2)
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)?(?<title>.+?)[_. ]+(?<absoluteepisode>(?<!\d)\d{1,2}(?:\.\d{1,2})?(?!\d))-(?<absoluteepisode2>(?<!\d)\d{1,2}(?:\.\d{1,2})?(?!\d|-))(?:_|\s|\.)*?(?<hash>\[.{8}\])?(?:$|\.)?",
    // Anime Title Absolute Episode Number
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)?(?<title>.+?)(?<absoluteepisodes>(?:[-_. ]+(?<!\d)\d{2,4}(?:\.\d{1,2})?(?!\d|[ip]))+)(?:_|-|\s|\.)*?(?<hash>\[.{8}\])?(?:$|\.)?",
    // Anime Title Absolute Episode Number, any separator
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ]?)?(?<title>.+?)(?<absoluteepisodes>(?:(?:[-_\W](?<![()\[!]))+(?<!\d)\d{2,3}(?:\.\d{1,2})?(?!\d|[ip]))+)(?:_|-|\s|\.)*?(?<hash>\[.{8}\])?(?:$|\.)?",
    // Extant, terrible multi-episode naming (extant.10708.hdtv-lol.mp4)
    r"(?i)^(?<title>.+?)[-_. ](?<season>[0]?\d?)(?<episode>\d{2})(?<episode2>\d{2})(?!\d)[-_. ]",
    // Season only with a bracketed season tag ([Season 1])
    r"(?i)^(?:\[(?<subgroup>.+?)\][-_. ])?(?<title>.+?)[-_. ]+?[\[(](?:S|Season|Saison|Series)[-_. ]?(?<season>\d{1,2}(?![-_. ]?\d))(?:[-_. )\]]|$)+(?<extras>EXTRAS|SUBPACK)?(?!\\)",
];

fn compile(sources: &[&str]) -> Vec<FancyRegex> {
    sources
        .iter()
        .map(|source| FancyRegex::new(source).unwrap())
        .collect()
}

/// Movie patterns followed by the year-first folder pattern.
pub static MOVIE_PATTERNS: LazyLock<Vec<FancyRegex>> = LazyLock::new(|| {
    let mut patterns = compile(&MOVIE_PATTERN_SOURCES);
    patterns.push(FancyRegex::new(MOVIE_FOLDER_PATTERN_SOURCE).unwrap());
    patterns
});

pub static SERIES_PATTERNS: LazyLock<Vec<FancyRegex>> =
    LazyLock::new(|| compile(&SERIES_PATTERN_SOURCES));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(MOVIE_PATTERNS.len(), 11);
        assert_eq!(SERIES_PATTERNS.len(), 77);
        LazyLock::force(&SERIES_INFORMATION);
        LazyLock::force(&BRACKETED_ALTERNATIVE_TITLE);
        LazyLock::force(&ALTERNATIVE_TITLE);
    }

    #[test]
    fn test_every_series_pattern_has_numbering() {
        const NUMBER_GROUPS: [&str; 9] = [
            "season",
            "episode",
            "absoluteepisode",
            "episodes",
            "absoluteepisodes",
            "seasonepisodes",
            "joinedepisodes",
            "airyear",
            "airdate",
        ];

        for pattern in SERIES_PATTERNS.iter() {
            let has_numbering = pattern
                .capture_names()
                .flatten()
                .any(|name| NUMBER_GROUPS.contains(&name));
            assert!(has_numbering, "no numbering group in {}", pattern.as_str());
        }
    }

    #[test]
    fn test_series_information() {
        assert!(SERIES_INFORMATION.is_match("Show.S01E02.720p").unwrap());
        assert!(SERIES_INFORMATION.is_match("Show S01 1080p").unwrap());
        assert!(!SERIES_INFORMATION.is_match("Movie.2020.1080p").unwrap());
    }

    #[test]
    fn test_edition_pattern() {
        let regex = FancyRegex::new(concat!("(?i)", edition!())).unwrap();
        let caps = regex
            .captures("Movie.Directors.Cut.2011")
            .unwrap()
            .unwrap();
        assert_eq!(caps.name("edition").unwrap().as_str(), "Directors.Cut");
    }
}
