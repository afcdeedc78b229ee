//! Broad-category bucketing of topical labels.
//!
//! Maps free-text category labels onto five fixed broad buckets via static
//! set membership. Labels that belong to no bucket resolve to the
//! [`BroadCategory::Uncategorized`] sentinel, and the batch operation drops
//! those rows after reporting the distinct unmatched labels.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::dataset::{Dataset, DatasetError};

/// Name of the column added by [`categorize`].
pub const BROAD_CATEGORY_COLUMN: &str = "Broad_category";

/// One of the five fixed broad categories, or the unmatched sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadCategory {
    GeographyPlaces,
    TechnologyDigitalEconomy,
    LifestyleWellness,
    ArtsCultureEntertainment,
    KnowledgeCurrentAffairs,
    Uncategorized,
}

impl BroadCategory {
    /// The five real buckets, in bucket-table order.
    pub const BUCKETS: [BroadCategory; 5] = [
        BroadCategory::GeographyPlaces,
        BroadCategory::TechnologyDigitalEconomy,
        BroadCategory::LifestyleWellness,
        BroadCategory::ArtsCultureEntertainment,
        BroadCategory::KnowledgeCurrentAffairs,
    ];

    /// Human-readable label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            BroadCategory::GeographyPlaces => "Geography & Places",
            BroadCategory::TechnologyDigitalEconomy => "Technology & Digital Economy",
            BroadCategory::LifestyleWellness => "Lifestyle & Wellness",
            BroadCategory::ArtsCultureEntertainment => "Arts, Culture & Entertainment",
            BroadCategory::KnowledgeCurrentAffairs => "Knowledge & Current Affairs",
            BroadCategory::Uncategorized => "Uncategorized",
        }
    }

    fn labels(&self) -> &'static [&'static str] {
        match self {
            BroadCategory::GeographyPlaces => GEOGRAPHY_PLACES,
            BroadCategory::TechnologyDigitalEconomy => TECH_DIGITAL_ECONOMY,
            BroadCategory::LifestyleWellness => LIFESTYLE_WELLNESS,
            BroadCategory::ArtsCultureEntertainment => ARTS_CULTURE,
            BroadCategory::KnowledgeCurrentAffairs => KNOWLEDGE_AFFAIRS,
            BroadCategory::Uncategorized => &[],
        }
    }
}

impl fmt::Display for BroadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static GEOGRAPHY_PLACES: &[&str] = &[
    "Nepal", "New Zealand", "Europe", "Oman", "Pakistan", "Papua New Guinea", "Poland",
    "Panama", "Peru", "America", "Philippines", "Palau", "Armenia", "Puerto Rico",
    "Qatar", "Singapore", "Uganda", "Africa", "Russian Federation", "Portugal",
    "Paraguay", "Romania", "Ghana", "Congo, The Democratic Republic of",
    "Kazakhstan", "Palestine, State of", "Rwanda", "Saudi Arabia", "Sudan", "Senegal",
    "Somalia", "Sierra Leone", "El Salvador", "Serbia", "San Marino", "Tonga",
    "South Sudan", "Suriname", "Slovakia", "Ukraine", "Slovenia", "Sweden",
    "Seychelles", "Tunisia", "Turkey", "Taiwan, Province of China", "United States",
    "Uruguay", "Uzbekistan", "Virgin Islands, U.S.", "Viet Nam", "Vanuatu", "Samoa",
    "Yemen", "South Africa", "Zambia", "Zimbabwe", "Chad", "Thailand", "Tajikistan",
    "Turkmenistan", "Bulgaria", "Austria", "Australia", "Bangladesh", "Djibouti",
    "Italy", "Kyrgyzstan", "Israel", "Lithuania", "Afghanistan", "Aruba", "Angola",
    "Albania", "United Arab Emirates", "Andorra", "Guernsey", "Argentina", "Antarctica",
    "Guam", "Azerbaijan", "Haiti", "Burundi", "Belgium", "Benin", "Burkina Faso",
    "Latvia", "Bahrain", "Bahamas", "Bosnia and Herzegovina", "Belarus", "Belize",
    "Brazil", "Bermuda", "Barbados", "Bhutan", "Botswana", "Central African Republic",
    "Canada", "Switzerland", "Chile", "China", "Côte d'Ivoire", "Cameroon", "Congo",
    "Colombia", "Germany", "Cyprus", "Cabo Verde", "Costa Rica", "Cuba",
    "Christmas Island", "Cayman Islands", "Denmark", "Dominican Republic", "Algeria",
    "Eritrea", "Ecuador", "Egypt", "Estonia", "Georgia", "Iceland", "Spain",
    "Ethiopia", "Gabon", "Finland", "Fiji", "France", "United Kingdom", "Gibraltar",
    "Guinea", "Greece", "Gambia", "Iran, Islamic Republic of", "Greenland", "Ireland",
    "India", "Guatemala", "Guyana", "Hong Kong", "Iraq", "Croatia", "Honduras",
    "Hungary", "Indonesia", "Isle of Man", "Jamaica", "Kenya", "Jersey", "Malawi",
    "Jordan", "Japan", "Nigeria", "Cambodia", "Korea, Republic of", "Lebanon",
    "Kuwait", "Libya", "Liberia", "Liechtenstein", "Sri Lanka", "Luxembourg", "Macao",
    "Morocco", "Monaco", "Maldives", "Mexico", "Mali", "Malaysia", "Netherlands",
    "Norway", "Myanmar", "Madagascar", "North Macedonia", "Malta", "Mongolia",
    "Montenegro", "Montserrat", "Mozambique", "Mauritania", "Mauritius", "Martinique",
    "Niger", "Nicaragua", "Namibia", "Réunion", "Asia", "world", "Travel", "Hiking",
];

static TECH_DIGITAL_ECONOMY: &[&str] = &[
    "Technology", "Artificial Intelligence", "Coding", "Virtual Reality", "Google",
    "YouTube", "Facebook", "Amazon", "COVID", "Instagram", "TikTok", "Blockchain",
    "Cryptocurrency", "Bitcoin", "Real estate", "Stock", "Finance", "Jobs",
    "Startups", "Entrepreneurship", "Productivity", "Cars",
];

static LIFESTYLE_WELLNESS: &[&str] = &[
    "Health", "Fitness", "Yoga", "Meditation", "Mindfulness", "Nutrition", "Vegan",
    "Beauty", "Fashion", "Sports", "Recipes", "Food", "DIY", "Gardening", "Pets",
    "Home", "Happiness", "Minimalism",
];

static ARTS_CULTURE: &[&str] = &[
    "Art", "Music", "Movies", "Photography", "Design", "Architecture", "Poetry",
    "Anime", "Games", "Podcasts", "Love", "Relationships",
];

static KNOWLEDGE_AFFAIRS: &[&str] = &[
    "Education", "Science", "History", "Psychology", "Space", "News", "Politics",
    "Climate", "Sustainability", "Weather", "Philosophy", "Astronomy", "Parenting",
    "Motivation",
];

/// The bucket table: each broad category paired with its label set.
static BUCKET_TABLE: LazyLock<Vec<(BroadCategory, FxHashSet<&'static str>)>> =
    LazyLock::new(|| {
        BroadCategory::BUCKETS
            .iter()
            .map(|bucket| (*bucket, bucket.labels().iter().copied().collect()))
            .collect()
    });

/// Map a label to its broad category.
///
/// Pure membership lookup: returns the bucket containing the label, or
/// [`BroadCategory::Uncategorized`] if none does. Total — every input has a
/// defined output.
pub fn classify(label: &str) -> BroadCategory {
    for (bucket, labels) in BUCKET_TABLE.iter() {
        if labels.contains(label) {
            return *bucket;
        }
    }
    BroadCategory::Uncategorized
}

/// Result of a batch categorization pass.
#[derive(Debug, Clone, Serialize)]
pub struct CategorizeReport {
    /// Distinct labels that matched no bucket, sorted.
    pub unmatched_labels: Vec<String>,
    /// Rows dropped because their label was unmatched.
    pub dropped_rows: usize,
    /// Rows remaining after the drop.
    pub kept_rows: usize,
}

impl fmt::Display for CategorizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unmatched_labels.is_empty() {
            write!(f, "all {} rows categorized", self.kept_rows)
        } else {
            write!(
                f,
                "uncategorized labels: {:?} ({} rows dropped, {} kept)",
                self.unmatched_labels, self.dropped_rows, self.kept_rows
            )
        }
    }
}

/// Categorize every row of the dataset in place.
///
/// Adds a [`BROAD_CATEGORY_COLUMN`] column derived from `label_column`,
/// reports the distinct unmatched labels, then drops all rows that resolved
/// to the sentinel. Absent labels resolve to the sentinel as well.
pub fn categorize(
    dataset: &mut Dataset,
    label_column: &str,
) -> Result<CategorizeReport, DatasetError> {
    let labels = dataset.column(label_column)?;

    let assigned: Vec<BroadCategory> = labels
        .iter()
        .map(|cell| cell.as_deref().map_or(BroadCategory::Uncategorized, classify))
        .collect();

    let mut unmatched: FxHashSet<String> = FxHashSet::default();
    for (cell, bucket) in labels.iter().zip(&assigned) {
        if *bucket == BroadCategory::Uncategorized {
            if let Some(label) = cell {
                unmatched.insert(label.clone());
            }
        }
    }
    let mut unmatched_labels: Vec<String> = unmatched.into_iter().collect();
    unmatched_labels.sort_unstable();

    dataset.set_column(
        BROAD_CATEGORY_COLUMN,
        assigned.iter().map(|b| Some(b.as_str().to_string())).collect(),
    )?;

    let dropped_rows = assigned
        .iter()
        .filter(|b| **b == BroadCategory::Uncategorized)
        .count();
    dataset.retain_rows(|i| assigned[i] != BroadCategory::Uncategorized);

    let report = CategorizeReport {
        unmatched_labels,
        dropped_rows,
        kept_rows: dataset.len(),
    };
    if !report.unmatched_labels.is_empty() {
        log::info!("{report}");
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::column_of;

    #[test]
    fn test_classify_known_labels() {
        assert_eq!(classify("France"), BroadCategory::GeographyPlaces);
        assert_eq!(classify("Bitcoin"), BroadCategory::TechnologyDigitalEconomy);
        assert_eq!(classify("Yoga"), BroadCategory::LifestyleWellness);
        assert_eq!(classify("Music"), BroadCategory::ArtsCultureEntertainment);
        assert_eq!(classify("Politics"), BroadCategory::KnowledgeCurrentAffairs);
    }

    #[test]
    fn test_classify_unknown_label() {
        assert_eq!(classify("Zzyzx"), BroadCategory::Uncategorized);
        assert_eq!(classify(""), BroadCategory::Uncategorized);
        // Membership is exact; case matters.
        assert_eq!(classify("france"), BroadCategory::Uncategorized);
    }

    #[test]
    fn test_every_bucket_label_resolves_to_its_bucket() {
        for bucket in BroadCategory::BUCKETS {
            for label in bucket.labels() {
                assert_eq!(classify(label), bucket, "label {label:?}");
            }
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(
            BroadCategory::GeographyPlaces.to_string(),
            "Geography & Places"
        );
        assert_eq!(
            BroadCategory::ArtsCultureEntertainment.to_string(),
            "Arts, Culture & Entertainment"
        );
        assert_eq!(BroadCategory::Uncategorized.to_string(), "Uncategorized");
    }

    #[test]
    fn test_categorize_drops_unmatched_rows() {
        let mut ds = Dataset::from_columns([
            ("category", column_of(["France", "Zzyzx", "Bitcoin", "Zzyzx"])),
            ("full_content", column_of(["a", "b", "c", "d"])),
        ])
        .unwrap();

        let report = categorize(&mut ds, "category").unwrap();

        assert_eq!(report.unmatched_labels, vec!["Zzyzx".to_string()]);
        assert_eq!(report.dropped_rows, 2);
        assert_eq!(report.kept_rows, 2);
        assert_eq!(ds.len(), 2);

        let broad = ds.column(BROAD_CATEGORY_COLUMN).unwrap();
        assert_eq!(broad[0].as_deref(), Some("Geography & Places"));
        assert_eq!(broad[1].as_deref(), Some("Technology & Digital Economy"));
        // The content column shrank in lockstep.
        let content = ds.column("full_content").unwrap();
        assert_eq!(content[1].as_deref(), Some("c"));
    }

    #[test]
    fn test_categorize_absent_label_is_dropped() {
        let mut ds = Dataset::from_columns([(
            "category",
            vec![Some("France".to_string()), None],
        )])
        .unwrap();

        let report = categorize(&mut ds, "category").unwrap();
        // Absent labels resolve to the sentinel but are not reported as a
        // distinct label.
        assert!(report.unmatched_labels.is_empty());
        assert_eq!(report.dropped_rows, 1);
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn test_categorize_missing_column() {
        let mut ds = Dataset::new();
        assert!(matches!(
            categorize(&mut ds, "category"),
            Err(DatasetError::ColumnMissing(_))
        ));
    }
}
