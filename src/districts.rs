//! Static district coordinate table for Odisha.

use serde::Serialize;

/// Geographic coordinates of a district headquarters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

const fn coords(latitude: f64, longitude: f64) -> Coordinates {
    Coordinates {
        latitude,
        longitude,
    }
}

/// Districts of Odisha with their headquarters coordinates.
const DISTRICTS: &[(&str, Coordinates)] = &[
    ("Angul", coords(20.8409, 85.1012)),
    ("Balangir", coords(20.7079, 83.4886)),
    ("Balasore", coords(21.4942, 86.9317)),
    ("Bargarh", coords(21.3333, 83.6167)),
    ("Bhadrak", coords(21.0545, 86.5156)),
    ("Cuttack", coords(20.4625, 85.8830)),
    ("Debagarh", coords(21.5333, 84.7333)),
    ("Dhenkanal", coords(20.6629, 85.5963)),
    ("Gajapati", coords(19.3667, 84.7833)),
    ("Ganjam", coords(19.3870, 85.1787)),
    ("Jagatsinghpur", coords(20.2667, 86.1667)),
    ("Jajpur", coords(20.8486, 86.3373)),
    ("Jharsuguda", coords(21.8504, 84.0332)),
    ("Kalahandi", coords(19.9133, 83.1641)),
    ("Kandhamal", coords(20.3670, 84.2330)),
    ("Kendrapara", coords(20.5021, 86.4124)),
    ("Keonjhar", coords(21.6333, 85.6000)),
    ("Khordha", coords(20.1820, 85.6160)),
    ("Koraput", coords(18.8116, 82.7102)),
    ("Malkangiri", coords(18.3500, 81.9000)),
    ("Mayurbhanj", coords(21.9297, 86.7610)),
    ("Nabarangpur", coords(19.2333, 82.5333)),
    ("Nayagarh", coords(20.1288, 85.0962)),
    ("Nuapada", coords(20.7167, 82.7167)),
    ("Puri", coords(19.8134, 85.8315)),
    ("Rayagada", coords(19.1667, 83.4167)),
    ("Sambalpur", coords(21.4667, 83.9833)),
    ("Sonepur", coords(20.8333, 83.9167)),
    ("Sundergarh", coords(22.1167, 84.0333)),
];

/// Look up the coordinates for a district. Matching is exact and
/// case-sensitive; district names come from a fixed selection list.
#[must_use]
pub fn coordinates_for(name: &str) -> Option<Coordinates> {
    DISTRICTS
        .iter()
        .find(|(district, _)| *district == name)
        .map(|(_, coordinates)| *coordinates)
}

/// All known district names, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    DISTRICTS.iter().map(|(district, _)| *district)
}
