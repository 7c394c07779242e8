use crate::domain::model::{PostalRange, Region};
use crate::domain::ports::RegionTable;

/// The 26 Swiss cantons in official order.
pub const CANTONS: [(&str, &str); 26] = [
    ("ZH", "Zürich"),
    ("BE", "Bern"),
    ("LU", "Luzern"),
    ("UR", "Uri"),
    ("SZ", "Schwyz"),
    ("OW", "Obwalden"),
    ("NW", "Nidwalden"),
    ("GL", "Glarus"),
    ("ZG", "Zug"),
    ("FR", "Freiburg"),
    ("SO", "Solothurn"),
    ("BS", "Basel-Stadt"),
    ("BL", "Basel-Landschaft"),
    ("SH", "Schaffhausen"),
    ("AR", "Appenzell Ausserrhoden"),
    ("AI", "Appenzell Innerrhoden"),
    ("SG", "St. Gallen"),
    ("GR", "Graubünden"),
    ("AG", "Aargau"),
    ("TG", "Thurgau"),
    ("TI", "Tessin"),
    ("VD", "Waadt"),
    ("VS", "Wallis"),
    ("NE", "Neuenburg"),
    ("GE", "Genf"),
    ("JU", "Jura"),
];

/// Approximate postal ranges per canton. Real PLZ areas cross cantonal
/// borders; these ranges are disjoint and only good for classification and
/// rough size estimates. 7800-7999 and 9700-9999 belong to no canton.
pub const CANTON_POSTAL_RANGES: [(&str, &[PostalRange]); 26] = [
    (
        "ZH",
        &[
            PostalRange::new(8000, 8199),
            PostalRange::new(8300, 8499),
            PostalRange::new(8600, 8749),
            PostalRange::new(8900, 8999),
        ],
    ),
    (
        "BE",
        &[
            PostalRange::new(2500, 2799),
            PostalRange::new(3000, 3899),
            PostalRange::new(4900, 4999),
        ],
    ),
    (
        "LU",
        &[PostalRange::new(6000, 6059), PostalRange::new(6080, 6299)],
    ),
    ("UR", &[PostalRange::new(6460, 6499)]),
    (
        "SZ",
        &[PostalRange::new(6400, 6459), PostalRange::new(8800, 8899)],
    ),
    ("OW", &[PostalRange::new(6060, 6079)]),
    ("NW", &[PostalRange::new(6360, 6399)]),
    ("GL", &[PostalRange::new(8750, 8799)]),
    ("ZG", &[PostalRange::new(6300, 6359)]),
    ("FR", &[PostalRange::new(1500, 1799)]),
    ("SO", &[PostalRange::new(4500, 4899)]),
    ("BS", &[PostalRange::new(4000, 4099)]),
    ("BL", &[PostalRange::new(4100, 4499)]),
    ("SH", &[PostalRange::new(8200, 8299)]),
    ("AR", &[PostalRange::new(9100, 9149)]),
    ("AI", &[PostalRange::new(9150, 9199)]),
    (
        "SG",
        &[
            PostalRange::new(9000, 9099),
            PostalRange::new(9200, 9499),
            PostalRange::new(9600, 9699),
        ],
    ),
    ("GR", &[PostalRange::new(7000, 7799)]),
    ("AG", &[PostalRange::new(5000, 5999)]),
    (
        "TG",
        &[PostalRange::new(8500, 8599), PostalRange::new(9500, 9599)],
    ),
    ("TI", &[PostalRange::new(6500, 6999)]),
    (
        "VD",
        &[
            PostalRange::new(1000, 1199),
            PostalRange::new(1300, 1499),
            PostalRange::new(1800, 1869),
        ],
    ),
    (
        "VS",
        &[PostalRange::new(1870, 1999), PostalRange::new(3900, 3999)],
    ),
    ("NE", &[PostalRange::new(2000, 2499)]),
    ("GE", &[PostalRange::new(1200, 1299)]),
    ("JU", &[PostalRange::new(2800, 2999)]),
];

/// Built-in table for Switzerland.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwissCantons;

impl RegionTable for SwissCantons {
    fn regions(&self) -> Vec<Region> {
        CANTONS
            .iter()
            .map(|(code, label)| Region::new(*code, *label))
            .collect()
    }

    fn postal_ranges(&self) -> Vec<(String, Vec<PostalRange>)> {
        CANTON_POSTAL_RANGES
            .iter()
            .map(|(code, ranges)| (code.to_string(), ranges.to_vec()))
            .collect()
    }
}
