//! Static archetype catalog: display content merged into assembled results.
//!
//! Exactly one profile exists per archetype. A lookup miss for a code produced
//! by the engine is a data-integrity bug surfaced as
//! [`MissingArchetypeData`](super::assemble::MissingArchetypeData), never
//! papered over with a default profile.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::Archetype;

/// Descriptive blocks shown to every respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeContent {
    pub type_characteristics: String,
    pub growth_triggers: String,
    pub relationship_changes: String,
}

/// Descriptive blocks gated behind the premium entitlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumContent {
    pub ai_era_strengths: String,
    pub ai_era_weaknesses: String,
    pub industries: String,
    pub basic_skills: String,
    pub advanced_skills: String,
    pub career_paths: String,
}

/// Full display record for one archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub name: String,
    pub english_name: String,
    pub subtitle: String,
    pub traits: Vec<String>,
    pub free_content: FreeContent,
    pub premium_content: PremiumContent,
}

/// The closed set of archetype profiles.
#[derive(Debug, Clone)]
pub struct ArchetypeCatalog {
    profiles: BTreeMap<Archetype, ArchetypeProfile>,
}

impl ArchetypeCatalog {
    pub fn from_profiles(profiles: Vec<ArchetypeProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.archetype, profile))
                .collect(),
        }
    }

    pub fn profile(&self, archetype: Archetype) -> Option<&ArchetypeProfile> {
        self.profiles.get(&archetype)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The shipped catalog covering all six archetypes.
    pub fn builtin() -> Self {
        Self::from_profiles(vec![
            profile(
                Archetype::FV,
                "Future Visionary",
                "FUTURE VISIONARY",
                "AI-driven innovator",
                &["Cross-domain synthesis", "Novelty seeking", "Change agility"],
                FreeContent {
                    type_characteristics: "A creator who sketches futures nobody has seen yet. \
                        You are a born innovator, energized by imagining what does not exist and \
                        pulling it into reality."
                        .to_string(),
                    growth_triggers: "Your growth accelerates fastest through unprecedented \
                        challenges: projects with no playbook, where the path has to be invented."
                        .to_string(),
                    relationship_changes: "AI is your creative co-conspirator. You treat it not \
                        as a tool but as a partner that multiplies the reach of your ideas."
                        .to_string(),
                },
                PremiumContent {
                    ai_era_strengths: "Your strength is the exponential expansion of creativity \
                        through AI assistance: you turn generative tools into idea engines."
                        .to_string(),
                    ai_era_weaknesses: "Your weakness is over-rotation toward novelty and a \
                        struggle with follow-through once the new wears off."
                        .to_string(),
                    industries: "Tech startups: AI product development and zero-to-one venture \
                        creation."
                        .to_string(),
                    basic_skills: "Prompt engineering: shaping AI dialogue for creative output."
                        .to_string(),
                    advanced_skills: "Domain-specialized generative AI: deep application inside \
                        a chosen field."
                        .to_string(),
                    career_paths: "AI product manager (zero-to-one focus): leading the design \
                        and launch of new AI products."
                        .to_string(),
                },
            ),
            profile(
                Archetype::AT,
                "Akashic Traveler",
                "AKASHIC TRAVELER",
                "Curiosity-driven learner",
                &["Boundless curiosity", "Knowledge integration", "Teaching to learn"],
                FreeContent {
                    type_characteristics: "An explorer roaming an endless library. Your \
                        inexhaustible curiosity carries you across oceans of knowledge, \
                        connecting what others keep apart."
                        .to_string(),
                    growth_triggers: "Your growth is fed by expeditions into unknown territory: \
                        new fields, new disciplines, new mental models."
                        .to_string(),
                    relationship_changes: "AI is your sage with infinite recall. You use it as \
                        a guide for knowledge expeditions and a sparring partner for ideas."
                        .to_string(),
                },
                PremiumContent {
                    ai_era_strengths: "Your strength is absorbing and applying the flood of \
                        information the AI era produces faster than almost anyone."
                        .to_string(),
                    ai_era_weaknesses: "Your weakness is diffusion: curiosity scattered across \
                        too many fronts erodes depth and focus."
                        .to_string(),
                    industries: "Education, research, and knowledge work: AI-assisted learning \
                        and education innovation."
                        .to_string(),
                    basic_skills: "Research and information gathering with AI search and \
                        summarization."
                        .to_string(),
                    advanced_skills: "AI literacy and knowledge synthesis applied across \
                        domains."
                        .to_string(),
                    career_paths: "Researcher or educator: transmitting and creating knowledge \
                        in the AI era."
                        .to_string(),
                },
            ),
            profile(
                Archetype::VA,
                "Void Analyst",
                "VOID ANALYST",
                "Data-driven investigator",
                &["Logical rigor", "Pattern detection", "Detail mastery"],
                FreeContent {
                    type_characteristics: "A detective who pulls truth out of the void. You are \
                        an analysis specialist who finds signal in complex phenomena through \
                        logic and data."
                        .to_string(),
                    growth_triggers: "Your growth is driven by the discovery of unseen \
                        patterns: problems where the structure is hidden and must be derived."
                        .to_string(),
                    relationship_changes: "AI is your strongest analysis assistant. You wield \
                        it as a precision instrument for modeling and interpretation."
                        .to_string(),
                },
                PremiumContent {
                    ai_era_strengths: "Your strength is advanced data interpretation and \
                        prediction with AI analysis tools."
                        .to_string(),
                    ai_era_weaknesses: "Your weakness is analysis paralysis: action delayed \
                        while one more model runs."
                        .to_string(),
                    industries: "Data science: big-data analysis and AI prediction model \
                        development."
                        .to_string(),
                    basic_skills: "Statistical analysis and data visualization with AI/BI \
                        tooling."
                        .to_string(),
                    advanced_skills: "Machine learning model design and evaluation grounded in \
                        algorithmic understanding."
                        .to_string(),
                    career_paths: "Data scientist: shaping and implementing AI and data \
                        strategy."
                        .to_string(),
                },
            ),
            profile(
                Archetype::HC,
                "Harmony Coordinator",
                "HARMONY COORDINATOR",
                "Empathic team builder",
                &["Deep empathy", "Consensus building", "Trust-first leadership"],
                FreeContent {
                    type_characteristics: "A weaver of hearts and minds. You are a master of \
                        empathy who connects people and creates the conditions for teams to \
                        flourish."
                        .to_string(),
                    growth_triggers: "Your growth comes from bridging diverse values: rooms \
                        where perspectives clash and someone must translate."
                        .to_string(),
                    relationship_changes: "AI is a warm teammate. You use it as a lubricant \
                        for human relationships rather than a replacement for them."
                        .to_string(),
                },
                PremiumContent {
                    ai_era_strengths: "Your strength is the relationship building and team \
                        integration that stay irreplaceable in the AI era."
                        .to_string(),
                    ai_era_weaknesses: "Your weakness is over-empathizing to the point of \
                        self-sacrifice."
                        .to_string(),
                    industries: "Organizational development and talent: AI-augmented team \
                        building."
                        .to_string(),
                    basic_skills: "Facilitation and coaching with AI-assisted communication."
                        .to_string(),
                    advanced_skills: "Organizational psychology and AI people analytics: \
                        optimizing human-AI collaboration."
                        .to_string(),
                    career_paths: "Organizational development consultant: leading people and \
                        culture transformation in the AI era."
                        .to_string(),
                },
            ),
            profile(
                Archetype::MB,
                "Matrix Builder",
                "MATRIX BUILDER",
                "Hands-on system constructor",
                &["Process discipline", "Reliability focus", "Root-cause tenacity"],
                FreeContent {
                    type_characteristics: "An architect who keeps reality standing. You are a \
                        practical builder who turns abstract ideas into systems that actually \
                        run."
                        .to_string(),
                    growth_triggers: "Your growth comes from steadily solving concrete \
                        operational problems, one dependable improvement at a time."
                        .to_string(),
                    relationship_changes: "AI is the ultimate automation toolkit. You partner \
                        with it to strip friction out of every workflow you touch."
                        .to_string(),
                },
                PremiumContent {
                    ai_era_strengths: "Your strength is AI-powered process automation and \
                        operational optimization."
                        .to_string(),
                    ai_era_weaknesses: "Your weakness is a stability bias that slows your \
                        response to change."
                        .to_string(),
                    industries: "Systems development and operational improvement: AI \
                        automation and RPA adoption."
                        .to_string(),
                    basic_skills: "Process design and workflow analysis with AI tool \
                        integration."
                        .to_string(),
                    advanced_skills: "RPA and AI system construction with on-the-ground \
                        implementation strength."
                        .to_string(),
                    career_paths: "Operations manager: leading AI-driven frontline reform."
                        .to_string(),
                },
            ),
            profile(
                Archetype::GS,
                "Grand Strategist",
                "GRAND STRATEGIST",
                "Strategic visionary",
                &["Whole-board view", "Long-horizon planning", "Decisive execution"],
                FreeContent {
                    type_characteristics: "A strategist who plays the whole board. You survey \
                        the entire field, reason backward from the win, and find the optimal \
                        move."
                        .to_string(),
                    growth_triggers: "Your growth comes from making long-term visions \
                        concrete: turning direction into executable strategy."
                        .to_string(),
                    relationship_changes: "AI is your strongest strategy simulator. You use \
                        it as a staff officer for decisions that matter."
                        .to_string(),
                },
                PremiumContent {
                    ai_era_strengths: "Your strength is elevating strategy and decision \
                        quality with AI analysis."
                        .to_string(),
                    ai_era_weaknesses: "Your weakness is a whole-system bias that can thin \
                        out your feel for the front line."
                        .to_string(),
                    industries: "Corporate strategy and business development: AI-enabled \
                        management and new ventures."
                        .to_string(),
                    basic_skills: "Strategy formulation and decision processes with AI \
                        simulation."
                        .to_string(),
                    advanced_skills: "AI-driven management analysis and business strategy \
                        design."
                        .to_string(),
                    career_paths: "Corporate planning or business development manager: \
                        driving ventures in the AI era."
                        .to_string(),
                },
            ),
        ])
    }
}

fn profile(
    archetype: Archetype,
    name: &str,
    english_name: &str,
    subtitle: &str,
    traits: &[&str],
    free_content: FreeContent,
    premium_content: PremiumContent,
) -> ArchetypeProfile {
    ArchetypeProfile {
        archetype,
        name: name.to_string(),
        english_name: english_name.to_string(),
        subtitle: subtitle.to_string(),
        traits: traits.iter().map(|t| t.to_string()).collect(),
        free_content,
        premium_content,
    }
}
