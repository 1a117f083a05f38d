#![allow(dead_code)]

/// The reference photo listing: three locations, a ten-photo Krakow group.
pub const SAMPLE_LISTING: &str = include_str!("../fixtures/sample_valid.listing.txt");

/// A listing mixing valid lines with every rejection kind.
pub const MIXED_INVALID_LISTING: &str =
    include_str!("../fixtures/sample_mixed_invalid.listing.txt");

/// Expected renamed filenames for `SAMPLE_LISTING`, in input order.
pub const SAMPLE_RENAMED: [&str; 15] = [
    "Krakow02.jpg",
    "London1.png",
    "Krakow01.png",
    "Florianopolis2.jpg",
    "Florianopolis1.jpg",
    "London2.jpg",
    "Florianopolis3.png",
    "Krakow03.jpg",
    "Krakow09.png",
    "Krakow07.jpg",
    "Krakow06.jpg",
    "Krakow08.jpg",
    "Krakow04.png",
    "Krakow05.png",
    "Krakow10.jpg",
];

/// Expected renamed filenames for `MIXED_INVALID_LISTING`, in input order.
///
/// Tokyo keeps nine valid members, so its suffixes pad to width 1; the
/// three malformed lines must not widen the group.
pub const MIXED_RENAMED: [&str; 10] = [
    "Tokyo1.jpg",
    "Tokyo2.jpg",
    "Tokyo3.png",
    "Tokyo4.jpg",
    "Tokyo5.png",
    "Tokyo6.jpg",
    "Tokyo7.jpg",
    "Tokyo8.jpg",
    "Tokyo9.jpg",
    "Osaka1.png",
];

/// Build a listing where one location holds `count` photos in strictly
/// increasing timestamp order (one per year, so input order, chronological
/// order, and expected sequence order all coincide).
pub fn single_location_listing(location: &str, count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "photo{}.jpg, {}, {:04}-01-01 00:00:00",
                i + 1,
                location,
                2000 + i
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renamed filenames of parsed records, in order, panicking if any record
/// was left unnamed.
pub fn renamed_filenames(records: &[photoseq::listing::PhotoRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| {
            record
                .renamed_filename
                .clone()
                .expect("every parsed record should carry an assigned name")
        })
        .collect()
}
