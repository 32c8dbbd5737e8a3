//! Wine catalog domain model.
//!
//! Defines the [`WineItem`] record returned by the catalog endpoint, the six
//! fixed [`Category`] buckets that scope a fetch, and the [`SortKey`] used by
//! the list pipeline.

use serde::{Deserialize, Serialize};

/// Average score and review count, both kept as the strings the endpoint sends.
///
/// The endpoint does not guarantee numeric content, so parsing is deferred to
/// the consumers that need a number (sorting, display formatting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score as a decimal string (e.g. `"4.5"`).
    pub average: String,
    /// Number of reviews as an integer string (e.g. `"120"`).
    pub reviews: String,
}

impl Rating {
    /// Parses the average score, rejecting unparsable and NaN values.
    #[must_use]
    pub fn average_value(&self) -> Option<f64> {
        self.average
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| !value.is_nan())
    }

    /// Parses the leading integer of the review count.
    ///
    /// The endpoint sends text like `"1,451 ratings"`; thousands separators and
    /// any trailing words are ignored. `None` if there is no leading digit.
    ///
    /// ```
    /// use sommelier::domain::Rating;
    ///
    /// let rating = Rating { average: "4.7".into(), reviews: "1,451 ratings".into() };
    /// assert_eq!(rating.review_count(), Some(1451));
    /// ```
    #[must_use]
    pub fn review_count(&self) -> Option<u64> {
        let digits: String = self
            .reviews
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == ',')
            .filter(char::is_ascii_digit)
            .collect();
        digits.parse::<u64>().ok()
    }
}

/// A single wine as returned by the catalog.
///
/// Immutable once fetched. The identity is only unique within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WineItem {
    /// Identifier, unique within its category.
    pub id: i64,
    /// Display name of the wine.
    pub wine: String,
    /// Producer.
    pub winery: String,
    /// Rating summary.
    pub rating: Rating,
    /// Origin text (region, country).
    pub location: String,
    /// Label image URI.
    pub image: String,
}

impl WineItem {
    /// Returns the text the search filter matches against.
    ///
    /// Name, producer and origin joined by single spaces, in that order.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.wine, self.winery, self.location)
    }

    /// Formats the rating for display, e.g. `★ 4.5 (120)`.
    ///
    /// The average is rounded to one decimal when it parses; otherwise the raw
    /// string is shown unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sommelier::domain::{Rating, WineItem};
    ///
    /// let item = WineItem {
    ///     id: 1,
    ///     wine: "Gran Reserva".into(),
    ///     winery: "Bodega".into(),
    ///     rating: Rating { average: "4.46".into(), reviews: "120 ratings".into() },
    ///     location: "Spain".into(),
    ///     image: String::new(),
    /// };
    /// assert_eq!(item.rating_label(), "★ 4.5 (120 ratings)");
    /// ```
    #[must_use]
    pub fn rating_label(&self) -> String {
        let average = self
            .rating
            .average_value()
            .map_or_else(|| self.rating.average.clone(), |value| format!("{value:.1}"));
        format!("★ {average} ({})", self.rating.reviews)
    }
}

/// One of the six fixed wine categories used to scope catalog fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Reds,
    Whites,
    Sparkling,
    Rose,
    Dessert,
    Port,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Reds,
        Self::Whites,
        Self::Sparkling,
        Self::Rose,
        Self::Dessert,
        Self::Port,
    ];

    /// Path segment used by the catalog endpoint.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Reds => "reds",
            Self::Whites => "whites",
            Self::Sparkling => "sparkling",
            Self::Rose => "rose",
            Self::Dessert => "dessert",
            Self::Port => "port",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reds => "Red",
            Self::Whites => "White",
            Self::Sparkling => "Sparkling",
            Self::Rose => "Rosé",
            Self::Dessert => "Dessert",
            Self::Port => "Port",
        }
    }

    /// Glyph shown next to the label in the category bar.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Reds => '🍷',
            Self::Whites => '🥂',
            Self::Sparkling => '✨',
            Self::Rose => '🌸',
            Self::Dessert => '🍨',
            Self::Port => '⚓',
        }
    }

    /// Looks up a category by its endpoint id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }

    /// Next category in display order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous category in display order, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

/// Numeric field the wine list is sorted by, always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Average score.
    #[default]
    Rating,
    /// Number of reviews.
    ReviewCount,
}

impl SortKey {
    /// Both sort keys in display order.
    pub const ALL: [Self; 2] = [Self::Rating, Self::ReviewCount];

    /// Configuration id (`rating` / `reviews`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::ReviewCount => "reviews",
        }
    }

    /// Label shown in the sort bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::ReviewCount => "Reviews",
        }
    }

    /// Looks up a sort key by its configuration id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.id() == id)
    }

    /// The other sort key.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Rating => Self::ReviewCount,
            Self::ReviewCount => Self::Rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
        assert_eq!(Category::from_id("champagne"), None);
    }

    #[test]
    fn category_cycling_wraps() {
        assert_eq!(Category::Port.next(), Category::Reds);
        assert_eq!(Category::Reds.previous(), Category::Port);
        assert_eq!(Category::Whites.next(), Category::Sparkling);
    }

    #[test]
    fn rating_parsing_rejects_garbage() {
        let rating = Rating {
            average: "NaN".to_string(),
            reviews: "no reviews".to_string(),
        };
        assert_eq!(rating.average_value(), None);
        assert_eq!(rating.review_count(), None);

        let rating = Rating {
            average: "4.2".to_string(),
            reviews: "2,048 ratings".to_string(),
        };
        assert_eq!(rating.review_count(), Some(2048));

        let rating = Rating {
            average: " 4.7 ".to_string(),
            reviews: "301".to_string(),
        };
        assert_eq!(rating.average_value(), Some(4.7));
        assert_eq!(rating.review_count(), Some(301));
    }

    #[test]
    fn wine_item_deserializes_catalog_shape() {
        let json = r#"{
            "id": 7,
            "wine": "Gran Reserva",
            "winery": "Bodega Uno",
            "rating": { "average": "4.5", "reviews": "10" },
            "location": "Spain\n·\nRioja",
            "image": "https://images.example/7.png"
        }"#;
        let item: WineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.rating.average, "4.5");
        assert_eq!(item.search_text(), "Gran Reserva Bodega Uno Spain\n·\nRioja");
    }
}
