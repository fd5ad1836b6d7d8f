//! Search query vocabulary and builder.
//!
//! This module mirrors the query grammar of the Wallhaven search endpoint:
//! category and purity bitmasks, sorting options, toplist ranges, fixed
//! color swatches, and resolution filters. [`SearchQuery`] collects them
//! and renders the final set of query parameters.

use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Category filter flags.
///
/// Rendered as a 3-digit bitmask string ("110" means general and anime
/// but no people), which is the format the API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Categories {
    /// Include general wallpapers.
    pub general: bool,
    /// Include anime wallpapers.
    pub anime: bool,
    /// Include people wallpapers.
    pub people: bool,
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            general: true,
            anime: true,
            people: false,
        }
    }
}

impl Categories {
    /// All three categories enabled.
    pub fn all() -> Self {
        Self {
            general: true,
            anime: true,
            people: true,
        }
    }

    pub(crate) fn as_param(&self) -> String {
        format!(
            "{}{}{}",
            self.general as u8, self.anime as u8, self.people as u8
        )
    }
}

/// Content purity flags.
///
/// Rendered as a 3-digit bitmask string like [`Categories`]. NSFW results
/// require a valid API key on the account side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purity {
    /// Include safe-for-work content.
    pub sfw: bool,
    /// Include sketchy content.
    pub sketchy: bool,
    /// Include NSFW content (API key required).
    pub nsfw: bool,
}

impl Default for Purity {
    fn default() -> Self {
        Self {
            sfw: true,
            sketchy: true,
            nsfw: false,
        }
    }
}

impl Purity {
    /// SFW only.
    pub fn sfw_only() -> Self {
        Self {
            sfw: true,
            sketchy: false,
            nsfw: false,
        }
    }

    pub(crate) fn as_param(&self) -> String {
        format!("{}{}{}", self.sfw as u8, self.sketchy as u8, self.nsfw as u8)
    }
}

/// Sorting options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sorting {
    /// Newest uploads first.
    #[default]
    DateAdded,
    /// Best match for the query string.
    Relevance,
    /// Random order (pair with a seed for stable pagination).
    Random,
    /// Most viewed first.
    Views,
    /// Most favorited first.
    Favorites,
    /// Site toplist (combine with [`TopRange`]).
    Toplist,
}

impl Sorting {
    /// Wire value for the `sorting` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sorting::DateAdded => "date_added",
            Sorting::Relevance => "relevance",
            Sorting::Random => "random",
            Sorting::Views => "views",
            Sorting::Favorites => "favorites",
            Sorting::Toplist => "toplist",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Descending (API default).
    #[default]
    Desc,
    /// Ascending.
    Asc,
}

impl Order {
    /// Wire value for the `order` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Desc => "desc",
            Order::Asc => "asc",
        }
    }
}

/// Time window for toplist sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopRange {
    OneDay,
    ThreeDays,
    OneWeek,
    /// One month (API default).
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl TopRange {
    /// Wire value for the `topRange` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopRange::OneDay => "1d",
            TopRange::ThreeDays => "3d",
            TopRange::OneWeek => "1w",
            TopRange::OneMonth => "1M",
            TopRange::ThreeMonths => "3M",
            TopRange::SixMonths => "6M",
            TopRange::OneYear => "1y",
        }
    }
}

/// The fixed palette of dominant-color swatches the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Lonestar,
    RedBerry,
    GuardsmanRed,
    PersianRed,
    FrenchRose,
    Plum,
    RoyalPurple,
    Sapphire,
    ScienceBlue,
    PacificBlue,
    Downy,
    Atlantis,
    Limeade,
    VerdunGreen,
    DarkOlive,
    Olive,
    EarlsGreen,
    Yellow,
    Sunglow,
    OrangePeel,
    BlazeOrange,
    Tuscany,
    PottersClay,
    NutmegWoodFinish,
    Black,
    DustyGray,
    Silver,
    White,
    GunPowder,
}

impl Color {
    /// Hex code (without `#`) for the `colors` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Lonestar => "660000",
            Color::RedBerry => "990000",
            Color::GuardsmanRed => "cc0000",
            Color::PersianRed => "cc3333",
            Color::FrenchRose => "ea4c88",
            Color::Plum => "993399",
            Color::RoyalPurple => "663399",
            Color::Sapphire => "333399",
            Color::ScienceBlue => "0066cc",
            Color::PacificBlue => "0099cc",
            Color::Downy => "66cccc",
            Color::Atlantis => "77cc33",
            Color::Limeade => "669900",
            Color::VerdunGreen => "336600",
            Color::DarkOlive => "666600",
            Color::Olive => "999900",
            Color::EarlsGreen => "cccc33",
            Color::Yellow => "ffff00",
            Color::Sunglow => "ffcc33",
            Color::OrangePeel => "ff9900",
            Color::BlazeOrange => "ff6600",
            Color::Tuscany => "cc6633",
            Color::PottersClay => "996633",
            Color::NutmegWoodFinish => "663300",
            Color::Black => "000000",
            Color::DustyGray => "999999",
            Color::Silver => "cccccc",
            Color::White => "ffffff",
            Color::GunPowder => "424153",
        }
    }
}

/// Image formats accepted by the search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpeg,
    Jpg,
    Png,
}

impl ImageType {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "jpeg",
            ImageType::Jpg => "jpg",
            ImageType::Png => "png",
        }
    }
}

/// An exact pixel resolution, rendered as "WxH".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a resolution from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An aspect ratio such as 16x9, rendered the same way as [`Resolution`].
pub type Ratio = Resolution;

/// Generate a random 6-character alphanumeric seed.
///
/// Passing the same seed with [`Sorting::Random`] keeps the shuffle
/// stable across result pages.
pub fn random_seed() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect()
}

fn join_dimensions(dims: &[Resolution]) -> String {
    dims.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Builder for the search endpoint's filters.
///
/// Only filters that were explicitly set produce query parameters; a
/// default `SearchQuery` renders to an empty parameter list.
///
/// # Example
///
/// ```rust
/// use wallhaven_api::query::{Categories, Purity, SearchQuery, Sorting};
///
/// let query = SearchQuery::new()
///     .query("mountains")
///     .categories(Categories { general: true, anime: false, people: false })
///     .purity(Purity::sfw_only())
///     .sorting(Sorting::Views)
///     .page(2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    q: Option<String>,
    categories: Option<Categories>,
    purity: Option<Purity>,
    sorting: Option<Sorting>,
    order: Option<Order>,
    top_range: Option<TopRange>,
    atleast: Option<Resolution>,
    resolutions: Vec<Resolution>,
    ratios: Vec<Ratio>,
    color: Option<Color>,
    page: Option<u32>,
    seed: Option<String>,
}

impl SearchQuery {
    /// Create an empty query (no filters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text query string (keywords, `+tag`/`-tag`, `@username`, ...).
    pub fn query<S: Into<String>>(mut self, q: S) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Restrict result categories.
    pub fn categories(mut self, categories: Categories) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Restrict result purity.
    pub fn purity(mut self, purity: Purity) -> Self {
        self.purity = Some(purity);
        self
    }

    /// Sort order of results.
    pub fn sorting(mut self, sorting: Sorting) -> Self {
        self.sorting = Some(sorting);
        self
    }

    /// Sort direction.
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Time window when sorting by toplist.
    pub fn top_range(mut self, range: TopRange) -> Self {
        self.top_range = Some(range);
        self
    }

    /// Minimum resolution.
    pub fn atleast(mut self, resolution: Resolution) -> Self {
        self.atleast = Some(resolution);
        self
    }

    /// Add an exact resolution filter (repeatable).
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolutions.push(resolution);
        self
    }

    /// Add an aspect-ratio filter (repeatable).
    pub fn ratio(mut self, ratio: Ratio) -> Self {
        self.ratios.push(ratio);
        self
    }

    /// Filter by dominant color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Result page (1-indexed).
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Seed for stable random sorting (see [`random_seed`]).
    pub fn seed<S: Into<String>>(mut self, seed: S) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Render the configured filters as query parameters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(q) = &self.q {
            params.push(("q", q.clone()));
        }
        if let Some(categories) = &self.categories {
            params.push(("categories", categories.as_param()));
        }
        if let Some(purity) = &self.purity {
            params.push(("purity", purity.as_param()));
        }
        if let Some(sorting) = &self.sorting {
            params.push(("sorting", sorting.as_str().to_string()));
        }
        if let Some(order) = &self.order {
            params.push(("order", order.as_str().to_string()));
        }
        if let Some(range) = &self.top_range {
            params.push(("topRange", range.as_str().to_string()));
        }
        if let Some(atleast) = &self.atleast {
            params.push(("atleast", atleast.to_string()));
        }
        if !self.resolutions.is_empty() {
            params.push(("resolutions", join_dimensions(&self.resolutions)));
        }
        if !self.ratios.is_empty() {
            params.push(("ratios", join_dimensions(&self.ratios)));
        }
        if let Some(color) = &self.color {
            params.push(("colors", color.as_str().to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(seed) = &self.seed {
            params.push(("seed", seed.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_bitmask() {
        let categories = Categories {
            general: true,
            anime: false,
            people: true,
        };
        assert_eq!(categories.as_param(), "101");
        assert_eq!(Categories::default().as_param(), "110");
        assert_eq!(Categories::all().as_param(), "111");
    }

    #[test]
    fn test_purity_bitmask() {
        let purity = Purity {
            sfw: false,
            sketchy: true,
            nsfw: true,
        };
        assert_eq!(purity.as_param(), "011");
        assert_eq!(Purity::sfw_only().as_param(), "100");
    }

    #[test]
    fn test_resolution_display() {
        assert_eq!(Resolution::new(1920, 1080).to_string(), "1920x1080");
    }

    #[test]
    fn test_empty_query_has_no_params() {
        assert!(SearchQuery::new().to_params().is_empty());
    }

    #[test]
    fn test_full_query_params() {
        let query = SearchQuery::new()
            .query("nature")
            .categories(Categories::default())
            .purity(Purity::sfw_only())
            .sorting(Sorting::Toplist)
            .order(Order::Asc)
            .top_range(TopRange::OneWeek)
            .atleast(Resolution::new(2560, 1440))
            .resolution(Resolution::new(1920, 1080))
            .resolution(Resolution::new(3840, 2160))
            .ratio(Ratio::new(16, 9))
            .color(Color::Black)
            .page(3)
            .seed("abc123");

        let params = query.to_params();
        assert_eq!(
            params,
            vec![
                ("q", "nature".to_string()),
                ("categories", "110".to_string()),
                ("purity", "100".to_string()),
                ("sorting", "toplist".to_string()),
                ("order", "asc".to_string()),
                ("topRange", "1w".to_string()),
                ("atleast", "2560x1440".to_string()),
                ("resolutions", "1920x1080,3840x2160".to_string()),
                ("ratios", "16x9".to_string()),
                ("colors", "000000".to_string()),
                ("page", "3".to_string()),
                ("seed", "abc123".to_string()),
            ]
        );
    }

    #[test]
    fn test_random_seed_shape() {
        let seed = random_seed();
        assert_eq!(seed.len(), 6);
        assert!(seed.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
