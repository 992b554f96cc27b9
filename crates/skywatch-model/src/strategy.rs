//! Mitigation strategy knowledge base.
//!
//! Two independent evaluators live here. The strategy grid scores a
//! free-form pick against the asteroid's size class and hazard flag, while
//! the approach dialog draws from fixed pools of pre-tagged options. They
//! intentionally never share rules.

use rand::Rng;

use crate::core::enums::{ApproachOptionId, FeedbackQuality, SizeClass, StrategyId};
use crate::core::types::AsteroidProfile;
use crate::estimator::size_class;

/// Static card for one mitigation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyProfile {
    pub id: StrategyId,
    pub title: &'static str,
    pub description: &'static str,
    pub effectiveness: &'static str,
    pub cost: &'static str,
    pub timeframe: &'static str,
}

/// Static card for one approach-dialog option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproachOptionMeta {
    pub id: ApproachOptionId,
    pub title: &'static str,
    pub description: &'static str,
    pub is_correct: bool,
}

pub const ALL_STRATEGIES: [StrategyId; 6] = [
    StrategyId::KineticImpactor,
    StrategyId::GravityTractor,
    StrategyId::NuclearDeflection,
    StrategyId::LaserAblation,
    StrategyId::SolarSail,
    StrategyId::MassDriver,
];

/// Dialog options tagged as physically plausible.
pub const CORRECT_OPTIONS: [ApproachOptionId; 4] = [
    ApproachOptionId::KineticImpactor,
    ApproachOptionId::GravitationalTractor,
    ApproachOptionId::LaserAblation,
    ApproachOptionId::NuclearExplosions,
];

/// Dialog options tagged as wrong answers.
pub const WRONG_OPTIONS: [ApproachOptionId; 8] = [
    ApproachOptionId::BombingAsteroid,
    ApproachOptionId::AttachingRocket,
    ApproachOptionId::TeleportToSun,
    ApproachOptionId::GlobalFireworks,
    ApproachOptionId::BackyardSlingshots,
    ApproachOptionId::ReflectiveFoil,
    ApproachOptionId::ShootWithGun,
    ApproachOptionId::AskGoku,
];

pub fn profile(id: StrategyId) -> StrategyProfile {
    match id {
        StrategyId::KineticImpactor => StrategyProfile {
            id,
            title: "Kinetic Impactor Mission",
            description: "Launch a spacecraft to collide with the asteroid and change its velocity",
            effectiveness: "High for small to medium asteroids",
            cost: "Moderate",
            timeframe: "2-5 years",
        },
        StrategyId::GravityTractor => StrategyProfile {
            id,
            title: "Gravity Tractor",
            description: "Use a spacecraft to gravitationally pull the asteroid off course",
            effectiveness: "High for large asteroids",
            cost: "High",
            timeframe: "5-10 years",
        },
        StrategyId::NuclearDeflection => StrategyProfile {
            id,
            title: "Nuclear Deflection",
            description: "Detonate nuclear devices near the asteroid to alter its trajectory",
            effectiveness: "Very High",
            cost: "Very High",
            timeframe: "1-3 years",
        },
        StrategyId::LaserAblation => StrategyProfile {
            id,
            title: "Laser Ablation",
            description: "Use focused lasers to vaporize material and create thrust",
            effectiveness: "Medium",
            cost: "High",
            timeframe: "3-7 years",
        },
        StrategyId::SolarSail => StrategyProfile {
            id,
            title: "Solar Sail Attachment",
            description: "Attach reflective sails to use solar radiation pressure",
            effectiveness: "Low to Medium",
            cost: "Low",
            timeframe: "2-4 years",
        },
        StrategyId::MassDriver => StrategyProfile {
            id,
            title: "Mass Driver Installation",
            description: "Install a device to eject material and create reaction force",
            effectiveness: "Medium to High",
            cost: "High",
            timeframe: "4-8 years",
        },
    }
}

pub fn option_meta(id: ApproachOptionId) -> ApproachOptionMeta {
    match id {
        ApproachOptionId::KineticImpactor => ApproachOptionMeta {
            id,
            title: "Kinetic Impactor",
            description: "A spacecraft collides with the asteroid to change its velocity.",
            is_correct: true,
        },
        ApproachOptionId::GravitationalTractor => ApproachOptionMeta {
            id,
            title: "Gravitational Tractor",
            description: "A nearby spacecraft uses gravity to gently tug it off course.",
            is_correct: true,
        },
        ApproachOptionId::LaserAblation => ApproachOptionMeta {
            id,
            title: "Laser Ablation",
            description: "Focused lasers vaporize material, creating continuous thrust over time.",
            is_correct: true,
        },
        ApproachOptionId::NuclearExplosions => ApproachOptionMeta {
            id,
            title: "Nuclear Explosions",
            description: "Detonations near the surface impart a large, rapid trajectory change.",
            is_correct: true,
        },
        ApproachOptionId::BombingAsteroid => ApproachOptionMeta {
            id,
            title: "Bombing the Asteroid",
            description: "Fragmentation increases risk; debris can still impact Earth.",
            is_correct: false,
        },
        ApproachOptionId::AttachingRocket => ApproachOptionMeta {
            id,
            title: "Attaching a Rocket",
            description: "Impractical anchoring and control; insufficient thrust at scale.",
            is_correct: false,
        },
        ApproachOptionId::TeleportToSun => ApproachOptionMeta {
            id,
            title: "Teleport It to the Sun",
            description: "Teleportation does not exist; orbital mechanics are non-trivial.",
            is_correct: false,
        },
        ApproachOptionId::GlobalFireworks => ApproachOptionMeta {
            id,
            title: "Global Fireworks to 'Confuse' It",
            description: "Fireworks have negligible impulse and do not work in space.",
            is_correct: false,
        },
        ApproachOptionId::BackyardSlingshots => ApproachOptionMeta {
            id,
            title: "Backyard Slingshots",
            description: "Momentum is many orders of magnitude too small.",
            is_correct: false,
        },
        ApproachOptionId::ReflectiveFoil => ApproachOptionMeta {
            id,
            title: "Cover It in Reflective Foil",
            description: "Radiation pressure is far too weak for urgent deflection.",
            is_correct: false,
        },
        ApproachOptionId::ShootWithGun => ApproachOptionMeta {
            id,
            title: "Shoot It with a Gun",
            description: "Projectiles are trivial compared to asteroid mass and momentum.",
            is_correct: false,
        },
        ApproachOptionId::AskGoku => ApproachOptionMeta {
            id,
            title: "Ask Goku to Deflect It",
            description: "Fictional character; not an actionable mitigation strategy.",
            is_correct: false,
        },
    }
}

/// Points awarded for pairing `id` with `asteroid`.
pub fn strategy_score(id: StrategyId, asteroid: &AsteroidProfile) -> u32 {
    let size = size_class(asteroid.diameter_km);
    let hazardous = asteroid.is_hazardous;
    let mut score = 0;

    match id {
        StrategyId::KineticImpactor if size != SizeClass::Large => score += 2,
        StrategyId::GravityTractor if size == SizeClass::Large || hazardous => score += 2,
        StrategyId::NuclearDeflection if hazardous || size == SizeClass::Large => score += 2,
        StrategyId::LaserAblation if size != SizeClass::Large => score += 2,
        StrategyId::SolarSail if size == SizeClass::Small && !hazardous => score += 2,
        StrategyId::MassDriver if size != SizeClass::Small => score += 2,
        _ => {}
    }

    if hazardous
        && matches!(id, StrategyId::NuclearDeflection | StrategyId::GravityTractor)
    {
        score += 1;
    }
    if size == SizeClass::Small
        && matches!(id, StrategyId::KineticImpactor | StrategyId::SolarSail)
    {
        score += 1;
    }

    score
}

/// Whether the pick counts as a correct answer in the strategy grid.
pub fn is_strategy_appropriate(id: StrategyId, asteroid: &AsteroidProfile) -> bool {
    strategy_score(id, asteroid) >= 2
}

/// Quality tier for the feedback card shown after a strategy pick.
pub fn feedback_quality(id: StrategyId, asteroid: &AsteroidProfile) -> FeedbackQuality {
    let d = asteroid.diameter_km;
    let excellent = match id {
        StrategyId::KineticImpactor => d < 1.0,
        StrategyId::GravityTractor => d > 0.5,
        StrategyId::NuclearDeflection => asteroid.is_hazardous && d > 1.0,
        StrategyId::LaserAblation => d < 2.0,
        StrategyId::SolarSail => !asteroid.is_hazardous,
        StrategyId::MassDriver => d > 0.3,
    };
    if excellent {
        FeedbackQuality::Excellent
    } else if is_strategy_appropriate(id, asteroid) {
        FeedbackQuality::Good
    } else {
        FeedbackQuality::Poor
    }
}

/// Builds the briefing question for `asteroid`.
///
/// Hazardous bodies always get the threat-assessment framing and bodies over
/// a kilometre the size/velocity framing; everything else draws a template
/// at random.
pub fn mitigation_question<R: Rng>(asteroid: &AsteroidProfile, rng: &mut R) -> String {
    if asteroid.is_hazardous {
        return question_template(4, asteroid);
    }
    if asteroid.diameter_km > 1.0 {
        return question_template(0, asteroid);
    }
    let idx = rng.gen_range(0..QUESTION_TEMPLATE_COUNT);
    question_template(idx, asteroid)
}

const QUESTION_TEMPLATE_COUNT: usize = 6;

fn question_template(idx: usize, asteroid: &AsteroidProfile) -> String {
    let threat = if asteroid.is_hazardous {
        "potentially hazardous"
    } else {
        "near-Earth"
    };
    match idx {
        0 => format!(
            "Given that {} is {:.2}km in diameter and traveling at {}km/s, which mitigation strategy would be most effective?",
            asteroid.name, asteroid.diameter_km, asteroid.velocity_km_s
        ),
        1 => format!(
            "This {} asteroid has a density of {}kg/m\u{b3}. What approach would you recommend?",
            threat, asteroid.density_kg_m3
        ),
        2 => format!(
            "With {}'s current trajectory and properties, how would you prioritize our planetary defense options?",
            asteroid.name
        ),
        3 => "Considering the size and velocity of this asteroid, which method would provide the best chance of deflection?".to_string(),
        4 => format!(
            "The asteroid {} presents a {} threat level. Which mitigation approach balances effectiveness with feasibility?",
            asteroid.name,
            if asteroid.is_hazardous { "significant" } else { "moderate" }
        ),
        _ => format!(
            "Given {}'s physical properties ({:.2}km, {}kg/m\u{b3}, {}km/s), what's your recommended planetary defense strategy?",
            asteroid.name, asteroid.diameter_km, asteroid.density_kg_m3, asteroid.velocity_km_s
        ),
    }
}
