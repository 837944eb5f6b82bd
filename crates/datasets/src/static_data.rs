//! The embedded datasets.
//!
//! The data provider is static by design: every view renders the same three
//! datasets so the backends can be compared on identical input. Loaded once,
//! read-only thereafter.

use std::collections::BTreeMap;

use crate::wire::{
    City, CountryEntry, EventProperties, Feature, FeatureCollection, PointGeometry,
    PopulationResponse,
};

/// (lon, lat, mag, place, time_ms, depth_km)
const EARTHQUAKE_ROWS: &[(f64, f64, f64, &str, i64, f64)] = &[
    (-122.714, 38.8025, 4.5, "Northern California", 1_702_500_000_000, 10.2),
    (-155.2867, 19.4069, 5.1, "Hawaii", 1_702_400_000_000, 35.0),
    (141.7589, 39.1538, 6.2, "Japan", 1_702_300_000_000, 50.5),
    (-70.6693, -33.4489, 5.8, "Chile", 1_702_200_000_000, 45.3),
    (121.0794, 14.5995, 4.9, "Philippines", 1_702_100_000_000, 25.0),
    (29.0785, 40.7667, 5.3, "Turkey", 1_702_000_000_000, 15.8),
    (95.956, 20.15, 5.0, "Myanmar", 1_701_900_000_000, 20.0),
    (-117.1611, 32.7157, 3.8, "San Diego, CA", 1_701_800_000_000, 8.5),
    (139.6917, 35.6895, 4.2, "Tokyo, Japan", 1_701_700_000_000, 30.0),
    (-77.0428, -12.0464, 5.5, "Lima, Peru", 1_701_600_000_000, 55.0),
    (106.8456, -6.2088, 5.7, "Jakarta, Indonesia", 1_701_500_000_000, 40.0),
    (126.978, 37.5665, 3.5, "Seoul, South Korea", 1_701_400_000_000, 12.0),
    (-118.2437, 34.0522, 4.1, "Los Angeles, CA", 1_701_300_000_000, 18.0),
    (77.209, 28.6139, 4.8, "Delhi, India", 1_701_200_000_000, 22.0),
    (-99.1332, 19.4326, 5.2, "Mexico City", 1_701_100_000_000, 60.0),
    (174.7633, -41.2865, 5.9, "Wellington, NZ", 1_701_000_000_000, 35.0),
    (116.4074, 39.9042, 3.9, "Beijing, China", 1_700_900_000_000, 15.0),
    (51.389, 35.6892, 4.6, "Tehran, Iran", 1_700_800_000_000, 28.0),
    (-43.1729, -22.9068, 3.2, "Rio de Janeiro", 1_700_700_000_000, 10.0),
    (100.5018, 13.7563, 4.4, "Bangkok, Thailand", 1_700_600_000_000, 25.0),
    (-122.4194, 37.7749, 4.0, "San Francisco, CA", 1_700_500_000_000, 12.0),
    (135.5023, 34.6937, 4.7, "Osaka, Japan", 1_700_400_000_000, 20.0),
    (-79.3832, 43.6532, 2.8, "Toronto, Canada", 1_700_300_000_000, 5.0),
    (28.9784, 41.0082, 5.4, "Istanbul, Turkey", 1_700_200_000_000, 18.0),
    (72.8777, 19.076, 4.3, "Mumbai, India", 1_700_100_000_000, 30.0),
];

/// (id, name, country, lat, lon, population, continent)
const CITY_ROWS: &[(u32, &str, &str, f64, f64, u64, &str)] = &[
    (1, "Tokyo", "Japan", 35.6762, 139.6503, 37_400_000, "Asia"),
    (2, "Delhi", "India", 28.7041, 77.1025, 31_000_000, "Asia"),
    (3, "Shanghai", "China", 31.2304, 121.4737, 27_800_000, "Asia"),
    (4, "São Paulo", "Brazil", -23.5505, -46.6333, 22_000_000, "South America"),
    (5, "Mexico City", "Mexico", 19.4326, -99.1332, 21_800_000, "North America"),
    (6, "Cairo", "Egypt", 30.0444, 31.2357, 21_300_000, "Africa"),
    (7, "Dhaka", "Bangladesh", 23.8103, 90.4125, 21_000_000, "Asia"),
    (8, "Mumbai", "India", 19.076, 72.8777, 20_700_000, "Asia"),
    (9, "Beijing", "China", 39.9042, 116.4074, 20_500_000, "Asia"),
    (10, "Osaka", "Japan", 34.6937, 135.5023, 19_200_000, "Asia"),
    (11, "New York", "USA", 40.7128, -74.006, 18_800_000, "North America"),
    (12, "Karachi", "Pakistan", 24.8607, 67.0011, 16_100_000, "Asia"),
    (13, "Buenos Aires", "Argentina", -34.6037, -58.3816, 15_400_000, "South America"),
    (14, "Istanbul", "Turkey", 41.0082, 28.9784, 15_200_000, "Europe"),
    (15, "Kolkata", "India", 22.5726, 88.3639, 14_900_000, "Asia"),
    (16, "Lagos", "Nigeria", 6.5244, 3.3792, 14_800_000, "Africa"),
    (17, "Manila", "Philippines", 14.5995, 120.9842, 14_400_000, "Asia"),
    (18, "Rio de Janeiro", "Brazil", -22.9068, -43.1729, 13_500_000, "South America"),
    (19, "Guangzhou", "China", 23.1291, 113.2644, 13_300_000, "Asia"),
    (20, "Los Angeles", "USA", 34.0522, -118.2437, 12_500_000, "North America"),
    (21, "Moscow", "Russia", 55.7558, 37.6173, 12_500_000, "Europe"),
    (22, "Paris", "France", 48.8566, 2.3522, 11_000_000, "Europe"),
    (23, "London", "UK", 51.5074, -0.1278, 9_500_000, "Europe"),
    (24, "Bangkok", "Thailand", 13.7563, 100.5018, 10_700_000, "Asia"),
    (25, "Jakarta", "Indonesia", -6.2088, 106.8456, 10_600_000, "Asia"),
    (26, "Seoul", "South Korea", 37.5665, 126.978, 9_900_000, "Asia"),
    (27, "Lima", "Peru", -12.0464, -77.0428, 10_800_000, "South America"),
    (28, "Toronto", "Canada", 43.6532, -79.3832, 6_200_000, "North America"),
    (29, "Sydney", "Australia", -33.8688, 151.2093, 5_300_000, "Oceania"),
    (30, "Berlin", "Germany", 52.52, 13.405, 3_700_000, "Europe"),
    (31, "Singapore", "Singapore", 1.3521, 103.8198, 5_900_000, "Asia"),
    (32, "Dubai", "UAE", 25.2048, 55.2708, 3_400_000, "Asia"),
    (33, "Cape Town", "South Africa", -33.9249, 18.4241, 4_700_000, "Africa"),
    (34, "Nairobi", "Kenya", -1.2921, 36.8219, 4_700_000, "Africa"),
    (35, "Madrid", "Spain", 40.4168, -3.7038, 6_600_000, "Europe"),
];

/// (alpha3, name, density per km^2, population)
const COUNTRY_ROWS: &[(&str, &str, f64, u64)] = &[
    ("CHN", "China", 153.0, 1_412_000_000),
    ("IND", "India", 464.0, 1_408_000_000),
    ("USA", "United States", 36.0, 331_900_000),
    ("IDN", "Indonesia", 151.0, 273_500_000),
    ("PAK", "Pakistan", 287.0, 225_200_000),
    ("BRA", "Brazil", 25.0, 214_300_000),
    ("NGA", "Nigeria", 226.0, 211_400_000),
    ("BGD", "Bangladesh", 1265.0, 166_300_000),
    ("RUS", "Russia", 9.0, 144_100_000),
    ("MEX", "Mexico", 66.0, 130_300_000),
    ("JPN", "Japan", 347.0, 125_800_000),
    ("ETH", "Ethiopia", 115.0, 118_000_000),
    ("PHL", "Philippines", 368.0, 111_000_000),
    ("EGY", "Egypt", 103.0, 104_300_000),
    ("VNM", "Vietnam", 314.0, 98_200_000),
    ("DEU", "Germany", 240.0, 83_200_000),
    ("TUR", "Turkey", 110.0, 85_000_000),
    ("IRN", "Iran", 52.0, 87_900_000),
    ("THA", "Thailand", 137.0, 70_000_000),
    ("GBR", "United Kingdom", 281.0, 67_500_000),
    ("FRA", "France", 119.0, 67_800_000),
    ("ITA", "Italy", 206.0, 59_100_000),
    ("ZAF", "South Africa", 49.0, 60_000_000),
    ("TZA", "Tanzania", 67.0, 63_600_000),
    ("KEN", "Kenya", 94.0, 55_000_000),
    ("KOR", "South Korea", 527.0, 51_800_000),
    ("COL", "Colombia", 46.0, 51_900_000),
    ("ESP", "Spain", 94.0, 47_400_000),
    ("ARG", "Argentina", 17.0, 45_800_000),
    ("DZA", "Algeria", 18.0, 45_400_000),
    ("UKR", "Ukraine", 75.0, 41_200_000),
    ("IRQ", "Iraq", 93.0, 42_200_000),
    ("POL", "Poland", 124.0, 37_700_000),
    ("CAN", "Canada", 4.0, 38_400_000),
    ("MAR", "Morocco", 83.0, 37_300_000),
    ("SAU", "Saudi Arabia", 16.0, 35_300_000),
    ("PER", "Peru", 26.0, 33_400_000),
    ("MYS", "Malaysia", 99.0, 32_800_000),
    ("AUS", "Australia", 3.0, 26_000_000),
    ("NLD", "Netherlands", 508.0, 17_500_000),
    ("BEL", "Belgium", 383.0, 11_600_000),
    ("GRC", "Greece", 81.0, 10_400_000),
    ("CZE", "Czechia", 139.0, 10_700_000),
    ("PRT", "Portugal", 111.0, 10_300_000),
    ("SWE", "Sweden", 25.0, 10_500_000),
    ("AZE", "Azerbaijan", 123.0, 10_200_000),
    ("HUN", "Hungary", 107.0, 9_600_000),
    ("AUT", "Austria", 109.0, 9_000_000),
    ("CHE", "Switzerland", 219.0, 8_700_000),
    ("ISR", "Israel", 400.0, 9_500_000),
    ("SGP", "Singapore", 8358.0, 5_500_000),
    ("DNK", "Denmark", 137.0, 5_900_000),
    ("FIN", "Finland", 18.0, 5_500_000),
    ("NOR", "Norway", 15.0, 5_400_000),
    ("IRL", "Ireland", 72.0, 5_100_000),
    ("NZL", "New Zealand", 19.0, 5_100_000),
];

pub fn earthquakes() -> FeatureCollection {
    FeatureCollection::new(
        EARTHQUAKE_ROWS
            .iter()
            .map(|&(lon, lat, mag, place, time, depth)| Feature {
                kind: "Feature".to_string(),
                geometry: PointGeometry {
                    kind: "Point".to_string(),
                    coordinates: [lon, lat],
                },
                properties: EventProperties {
                    mag: Some(mag),
                    place: place.to_string(),
                    time,
                    depth,
                },
            })
            .collect(),
    )
}

pub fn cities() -> Vec<City> {
    CITY_ROWS
        .iter()
        .map(|&(id, name, country, lat, lon, population, continent)| City {
            id,
            name: name.to_string(),
            country: country.to_string(),
            lat,
            lon,
            population,
            continent: continent.to_string(),
        })
        .collect()
}

pub fn population() -> PopulationResponse {
    let data: BTreeMap<String, CountryEntry> = COUNTRY_ROWS
        .iter()
        .map(|&(alpha3, name, density, population)| {
            (
                alpha3.to_string(),
                CountryEntry {
                    name: name.to_string(),
                    density,
                    population,
                },
            )
        })
        .collect();
    PopulationResponse::new(data)
}

#[cfg(test)]
mod tests {
    use super::{cities, earthquakes, population};

    #[test]
    fn dataset_sizes_are_fixed() {
        assert_eq!(earthquakes().features.len(), 25);
        assert_eq!(cities().len(), 35);
        assert_eq!(population().data.len(), 56);
    }

    #[test]
    fn known_rows_are_present() {
        let quake = &earthquakes().features[2];
        assert_eq!(quake.properties.place, "Japan");
        assert_eq!(quake.properties.mag, Some(6.2));

        let china = &population().data["CHN"];
        assert_eq!(china.name, "China");
        assert_eq!(china.density, 153.0);
    }
}
