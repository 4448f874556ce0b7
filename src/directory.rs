//! Curated mapping from Arabic country/city labels to the query parameters
//! the timings service expects.

/// A resolved location: what the user saw, and what the API receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub display_city: String,
    pub display_country: String,
    pub api_city: String,
    pub api_country: String,
}

impl Location {
    /// Location display text, "city، country" when a country is known.
    pub fn display(&self) -> String {
        if self.display_country.is_empty() {
            self.display_city.clone()
        } else {
            format!("{}، {}", self.display_city, self.display_country)
        }
    }
}

struct CountryEntry {
    label: &'static str,
    api_name: &'static str,
    cities: &'static [CityEntry],
}

struct CityEntry {
    label: &'static str,
    api_name: &'static str,
}

static DIRECTORY: &[CountryEntry] = &[
    CountryEntry {
        label: "لبنان",
        api_name: "Lebanon",
        cities: &[
            CityEntry { label: "بيروت", api_name: "Beirut" },
            CityEntry { label: "طرابلس", api_name: "Tripoli" },
            CityEntry { label: "صيدا", api_name: "Sidon" },
            CityEntry { label: "صور", api_name: "Tyre" },
        ],
    },
    CountryEntry {
        label: "قطر",
        api_name: "Qatar",
        cities: &[
            CityEntry { label: "الدوحة", api_name: "Doha" },
            CityEntry { label: "الوكرة", api_name: "Al Wakrah" },
            CityEntry { label: "الريان", api_name: "Al Rayyan" },
        ],
    },
    CountryEntry {
        label: "مصر",
        api_name: "Egypt",
        cities: &[
            CityEntry { label: "القاهرة", api_name: "Cairo" },
            CityEntry { label: "الإسكندرية", api_name: "Alexandria" },
            CityEntry { label: "الجيزة", api_name: "Giza" },
            CityEntry { label: "أسوان", api_name: "Aswan" },
        ],
    },
    CountryEntry {
        label: "السعودية",
        api_name: "Saudi Arabia",
        cities: &[
            CityEntry { label: "مكة المكرمة", api_name: "Makkah" },
            CityEntry { label: "المدينة المنورة", api_name: "Madinah" },
            CityEntry { label: "الرياض", api_name: "Riyadh" },
            CityEntry { label: "جدة", api_name: "Jeddah" },
            CityEntry { label: "الدمام", api_name: "Dammam" },
        ],
    },
    CountryEntry {
        label: "الإمارات",
        api_name: "United Arab Emirates",
        cities: &[
            CityEntry { label: "دبي", api_name: "Dubai" },
            CityEntry { label: "أبوظبي", api_name: "Abu Dhabi" },
            CityEntry { label: "الشارقة", api_name: "Sharjah" },
        ],
    },
    CountryEntry {
        label: "الأردن",
        api_name: "Jordan",
        cities: &[
            CityEntry { label: "عمّان", api_name: "Amman" },
            CityEntry { label: "الزرقاء", api_name: "Zarqa" },
            CityEntry { label: "إربد", api_name: "Irbid" },
        ],
    },
    CountryEntry {
        label: "الكويت",
        api_name: "Kuwait",
        cities: &[
            CityEntry { label: "مدينة الكويت", api_name: "Kuwait City" },
            CityEntry { label: "حولي", api_name: "Hawalli" },
        ],
    },
    CountryEntry {
        label: "المغرب",
        api_name: "Morocco",
        cities: &[
            CityEntry { label: "الرباط", api_name: "Rabat" },
            CityEntry { label: "الدار البيضاء", api_name: "Casablanca" },
            CityEntry { label: "فاس", api_name: "Fes" },
            CityEntry { label: "مراكش", api_name: "Marrakesh" },
        ],
    },
];

/// All curated country labels, in directory order.
pub fn country_labels() -> Vec<&'static str> {
    DIRECTORY.iter().map(|c| c.label).collect()
}

/// City labels for a curated country, or `None` for an unknown label.
pub fn city_labels(country_label: &str) -> Option<Vec<&'static str>> {
    DIRECTORY
        .iter()
        .find(|c| c.label == country_label)
        .map(|c| c.cities.iter().map(|city| city.label).collect())
}

/// Every curated (country label, city label) pair.
pub fn curated_pairs() -> Vec<(&'static str, &'static str)> {
    DIRECTORY
        .iter()
        .flat_map(|c| c.cities.iter().map(move |city| (c.label, city.label)))
        .collect()
}

/// Exact-match lookup of a curated country/city pair.
///
/// Matching is case-sensitive against the curated Arabic labels; the
/// returned api names are the curated English ones.
pub fn resolve(country_label: &str, city_label: &str) -> Option<Location> {
    let country = DIRECTORY.iter().find(|c| c.label == country_label)?;
    let city = country.cities.iter().find(|c| c.label == city_label)?;
    Some(Location {
        display_city: city.label.to_string(),
        display_country: country.label.to_string(),
        api_city: city.api_name.to_string(),
        api_country: country.api_name.to_string(),
    })
}

/// Split free text of the form "city, country" into a pass-through location.
///
/// Accepts the ASCII comma and the Arabic comma. The parts go to the timings
/// service verbatim; no directory lookup is involved.
pub fn parse_free_text(input: &str) -> Option<Location> {
    let (city, country) = input
        .split_once(',')
        .or_else(|| input.split_once('،'))?;

    let city = city.trim();
    let country = country.trim();
    if city.is_empty() || country.is_empty() {
        return None;
    }

    Some(Location {
        display_city: city.to_string(),
        display_country: country.to_string(),
        api_city: city.to_string(),
        api_country: country.to_string(),
    })
}
