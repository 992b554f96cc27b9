//! Versioned asteroid catalog.
//!
//! The profile table is owned by the engine and swapped wholesale: a
//! successful fetch replaces every entry and bumps the version, a failed
//! fetch installs the builtin fallback table. Entries keep their fetch
//! order so snapshots are deterministic.

use serde::Deserialize;

use skywatch_core::constants::{
    CATALOG_DENSITY_MAX, CATALOG_DENSITY_MIN, CATALOG_MAX_PROFILES, CATALOG_VELOCITY_MAX,
    CATALOG_VELOCITY_MIN, CUSTOM_PROFILE_KEY, DENSITY_CARBONACEOUS, DENSITY_COMETARY,
    DENSITY_METALLIC, DENSITY_STONY, DIAMETER_MIN_KM,
};
use skywatch_core::types::AsteroidProfile;

/// Why a catalog payload could not be turned into a profile table.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("catalog payload contains no asteroids")]
    Empty,
}

/// One selectable profile.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub key: String,
    pub profile: AsteroidProfile,
}

/// The active profile table. The custom entry is always present and always
/// first; named entries follow in fetch order.
#[derive(Debug, Clone)]
pub struct CatalogTable {
    version: u64,
    entries: Vec<CatalogEntry>,
}

impl CatalogTable {
    /// Startup table: the custom entry alone, version zero.
    pub fn initial() -> Self {
        Self {
            version: 0,
            entries: vec![CatalogEntry {
                key: CUSTOM_PROFILE_KEY.to_string(),
                profile: AsteroidProfile::custom(),
            }],
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&AsteroidProfile> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.profile)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries other than the custom one, for scenario selection.
    pub fn named_entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|e| e.key != CUSTOM_PROFILE_KEY)
    }

    /// Replace every named entry and bump the version. The custom entry is
    /// re-seated at the front untouched.
    pub fn swap(&mut self, named: Vec<CatalogEntry>) {
        let custom = self.entries.remove(0);
        self.entries = Vec::with_capacity(named.len() + 1);
        self.entries.push(custom);
        self.entries.extend(named);
        self.version += 1;
    }

    /// Number of named entries.
    pub fn named_count(&self) -> usize {
        self.entries.len() - 1
    }
}

/// The builtin fallback table of notable asteroids, installed when a fetch
/// fails.
pub fn builtin_fallback() -> Vec<CatalogEntry> {
    fn entry(
        key: &str,
        name: &str,
        diameter_km: f64,
        density_kg_m3: f64,
        velocity_km_s: f64,
        is_hazardous: bool,
        description: &str,
    ) -> CatalogEntry {
        CatalogEntry {
            key: key.to_string(),
            profile: AsteroidProfile {
                name: name.to_string(),
                diameter_km,
                density_kg_m3,
                velocity_km_s,
                is_hazardous,
                description: description.to_string(),
            },
        }
    }

    vec![
        entry("apophis", "Apophis (99942)", 0.33, 2600.0, 12.6, true,
            "Potentially hazardous asteroid, 2029 close approach"),
        entry("bennu", "Bennu (101955)", 0.5, 1200.0, 12.4, false,
            "OSIRIS-REx target, carbonaceous asteroid"),
        entry("ryugu", "Ryugu (162173)", 0.9, 1200.0, 11.8, false,
            "Hayabusa2 target, diamond-shaped asteroid"),
        entry("itokawa", "Itokawa (25143)", 0.3, 1900.0, 13.2, false,
            "Hayabusa target, rubble pile asteroid"),
        entry("eros", "Eros (433)", 16.8, 2700.0, 5.3, false,
            "First asteroid orbited by spacecraft"),
        entry("didymos", "Didymos (65803)", 0.78, 2200.0, 6.1, false,
            "DART mission target, binary system primary"),
        entry("ceres", "Ceres (1)", 950.0, 2100.0, 17.9, false,
            "Largest asteroid, dwarf planet"),
        entry("vesta", "Vesta (4)", 525.0, 3400.0, 19.3, false,
            "Second largest asteroid, metallic"),
        entry("chicxulub", "Chicxulub Impactor", 10.0, 3000.0, 20.0, false,
            "Dinosaur extinction event (estimated)"),
        entry("tunguska", "Tunguska Event", 0.05, 2000.0, 15.0, false,
            "1908 Siberian airburst (estimated)"),
    ]
}

// ---- NEO browse payload ----

#[derive(Debug, Deserialize)]
struct NeoBrowsePayload {
    #[serde(default)]
    near_earth_objects: Vec<NeoObject>,
}

#[derive(Debug, Deserialize)]
struct NeoObject {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    orbital_data: Option<OrbitalData>,
    #[serde(default)]
    close_approach_data: Vec<CloseApproach>,
    #[serde(default)]
    is_potentially_hazardous_asteroid: bool,
}

#[derive(Debug, Deserialize)]
struct EstimatedDiameter {
    #[serde(default)]
    kilometers: Option<DiameterRange>,
}

#[derive(Debug, Deserialize)]
struct DiameterRange {
    estimated_diameter_min: f64,
    estimated_diameter_max: f64,
}

#[derive(Debug, Deserialize)]
struct OrbitalData {
    #[serde(default)]
    orbit_class: Option<OrbitClass>,
}

/// The browse API has shipped the orbit class both as a bare string and as
/// a structured object; accept either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OrbitClass {
    Text(String),
    Object {
        #[serde(default)]
        orbit_class_type: Option<String>,
        #[serde(default)]
        orbit_class_description: Option<String>,
    },
}

impl OrbitClass {
    fn as_str(&self) -> &str {
        match self {
            OrbitClass::Text(s) => s,
            OrbitClass::Object {
                orbit_class_type,
                orbit_class_description,
            } => orbit_class_type
                .as_deref()
                .or(orbit_class_description.as_deref())
                .unwrap_or(""),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CloseApproach {
    #[serde(default)]
    relative_velocity: Option<RelativeVelocity>,
}

#[derive(Debug, Deserialize)]
struct RelativeVelocity {
    /// The API serialises this as a decimal string.
    #[serde(default)]
    kilometers_per_second: Option<String>,
}

/// Density guess from the orbit-class text.
fn density_for_orbit_class(class: &str) -> f64 {
    let lower = class.to_lowercase();
    if lower.contains("metal") || lower.contains("m-type") {
        DENSITY_METALLIC
    } else if lower.contains("carbon") || lower.contains("c-type") {
        DENSITY_CARBONACEOUS
    } else if lower.contains("comet") {
        DENSITY_COMETARY
    } else {
        DENSITY_STONY
    }
}

/// Parse a NEO browse payload into named catalog entries.
///
/// At most [`CATALOG_MAX_PROFILES`] objects are taken, in payload order.
/// Missing fields degrade to defaults rather than failing the whole
/// payload; an empty object list is an error.
pub fn parse_neo_catalog(body: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let payload: NeoBrowsePayload = serde_json::from_str(body)?;
    if payload.near_earth_objects.is_empty() {
        return Err(CatalogError::Empty);
    }

    let entries = payload
        .near_earth_objects
        .into_iter()
        .take(CATALOG_MAX_PROFILES)
        .enumerate()
        .map(|(i, neo)| {
            let name = neo
                .name
                .clone()
                .unwrap_or_else(|| format!("Asteroid {}", i + 1));

            let diameter_km = neo
                .estimated_diameter
                .and_then(|e| e.kilometers)
                .map(|r| (r.estimated_diameter_min + r.estimated_diameter_max) / 2.0)
                .unwrap_or(0.1)
                .max(DIAMETER_MIN_KM);

            let class = neo
                .orbital_data
                .as_ref()
                .and_then(|o| o.orbit_class.as_ref())
                .map(|c| c.as_str().to_string())
                .unwrap_or_default();
            let density_kg_m3 =
                density_for_orbit_class(&class).clamp(CATALOG_DENSITY_MIN, CATALOG_DENSITY_MAX);

            let velocity_km_s = neo
                .close_approach_data
                .first()
                .and_then(|a| a.relative_velocity.as_ref())
                .and_then(|v| v.kilometers_per_second.as_ref())
                .and_then(|s| s.parse::<f64>().ok())
                .unwrap_or(17.0)
                .clamp(CATALOG_VELOCITY_MIN, CATALOG_VELOCITY_MAX);

            let mut description = format!("NASA NEO ID: {}", neo.id);
            if !class.is_empty() {
                description.push_str(&format!(", Class: {class}"));
            }
            if neo.is_potentially_hazardous_asteroid {
                description.push_str(", Potentially Hazardous");
            }

            CatalogEntry {
                key: format!("asteroid-{i}"),
                profile: AsteroidProfile {
                    name,
                    diameter_km,
                    density_kg_m3,
                    velocity_km_s,
                    is_hazardous: neo.is_potentially_hazardous_asteroid,
                    description,
                },
            }
        })
        .collect();

    Ok(entries)
}
