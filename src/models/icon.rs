use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of icon keys a feature or amenity can reference.
///
/// Keys are parsed when the catalog is loaded, so an unrecognized key stops the
/// load instead of rendering an empty glyph later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum IconKey {
    Bed,
    Bath,
    Maximize,
    Wifi,
    Shield,
    Parking,
    Pool,
    Dumbbell,
    Trees,
    Sofa,
    Utensils,
    Gamepad,
    Zap,
    Thermometer,
    Coffee,
    Users,
    Briefcase,
    Truck,
    Headphones,
    Mail,
    Car,
    Film,
    Wind,
    User,
    Sun,
    Box,
    Camera,
    Trash,
}

impl IconKey {
    pub const ALL: [IconKey; 28] = [
        IconKey::Bed,
        IconKey::Bath,
        IconKey::Maximize,
        IconKey::Wifi,
        IconKey::Shield,
        IconKey::Parking,
        IconKey::Pool,
        IconKey::Dumbbell,
        IconKey::Trees,
        IconKey::Sofa,
        IconKey::Utensils,
        IconKey::Gamepad,
        IconKey::Zap,
        IconKey::Thermometer,
        IconKey::Coffee,
        IconKey::Users,
        IconKey::Briefcase,
        IconKey::Truck,
        IconKey::Headphones,
        IconKey::Mail,
        IconKey::Car,
        IconKey::Film,
        IconKey::Wind,
        IconKey::User,
        IconKey::Sun,
        IconKey::Box,
        IconKey::Camera,
        IconKey::Trash,
    ];

    /// Key as it appears in catalog data
    pub fn as_str(self) -> &'static str {
        match self {
            IconKey::Bed => "bed",
            IconKey::Bath => "bath",
            IconKey::Maximize => "maximize",
            IconKey::Wifi => "wifi",
            IconKey::Shield => "shield",
            IconKey::Parking => "parking",
            IconKey::Pool => "pool",
            IconKey::Dumbbell => "dumbbell",
            IconKey::Trees => "trees",
            IconKey::Sofa => "sofa",
            IconKey::Utensils => "utensils",
            IconKey::Gamepad => "gamepad",
            IconKey::Zap => "zap",
            IconKey::Thermometer => "thermometer",
            IconKey::Coffee => "coffee",
            IconKey::Users => "users",
            IconKey::Briefcase => "briefcase",
            IconKey::Truck => "truck",
            IconKey::Headphones => "headphones",
            IconKey::Mail => "mail",
            IconKey::Car => "car",
            IconKey::Film => "film",
            IconKey::Wind => "wind",
            IconKey::User => "user",
            IconKey::Sun => "sun",
            IconKey::Box => "box",
            IconKey::Camera => "camera",
            IconKey::Trash => "trash",
        }
    }

    /// Name of the glyph the presentation layer draws for this key
    pub fn glyph(self) -> &'static str {
        match self {
            IconKey::Bed => "Bed",
            IconKey::Bath => "Bath",
            IconKey::Maximize => "Maximize",
            IconKey::Wifi => "Wifi",
            IconKey::Shield => "Shield",
            IconKey::Parking => "ParkingCircle",
            IconKey::Pool => "Waves",
            IconKey::Dumbbell => "Dumbbell",
            IconKey::Trees => "Trees",
            IconKey::Sofa => "Sofa",
            IconKey::Utensils => "Utensils",
            IconKey::Gamepad => "Gamepad2",
            IconKey::Zap => "Zap",
            IconKey::Thermometer => "Thermometer",
            IconKey::Coffee => "Coffee",
            IconKey::Users => "Users",
            IconKey::Briefcase => "Briefcase",
            IconKey::Truck => "Truck",
            IconKey::Headphones => "Headphones",
            IconKey::Mail => "Mail",
            IconKey::Car => "Car",
            IconKey::Film => "Film",
            IconKey::Wind => "Wind",
            IconKey::User => "User",
            IconKey::Sun => "Sun",
            IconKey::Box => "Box",
            IconKey::Camera => "Camera",
            IconKey::Trash => "Trash2",
        }
    }
}

impl FromStr for IconKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownIcon(s.to_string()))
    }
}

impl TryFrom<String> for IconKey {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
