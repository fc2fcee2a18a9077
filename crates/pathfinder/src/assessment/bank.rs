//! The shipped Stage-1 question bank.
//!
//! Forty-six Likert statements, each carrying a sparse per-archetype weight
//! row. Weight magnitudes are small integers (0-3) expressing relative
//! influence, not normalized probabilities; every row has at least one
//! non-zero entry. The bank is built once at startup and treated as immutable
//! configuration.

use super::domain::Archetype::{AT, FV, GS, HC, MB, VA};
use super::domain::{Archetype, Question, QuestionBank, QuestionId};

fn q(
    id: &str,
    text: &str,
    category: &str,
    measurement: &str,
    weights: &[(Archetype, i32)],
) -> Question {
    Question {
        id: QuestionId::new(id),
        text: text.to_string(),
        category: category.to_string(),
        measurement: measurement.to_string(),
        weights: weights.to_vec(),
    }
}

const ADAPTATION: &str = "AI adaptation & innovation orientation";
const PRACTICE: &str = "Practice & system building orientation";
const INTERPERSONAL: &str = "Interpersonal & collaborative orientation";
const LEARNING: &str = "Learning & growth orientation";
const STRATEGY: &str = "Strategy, values & working style";
const COLLABORATION: &str = "AI collaboration & future adaptation";

/// Build the Stage-1 bank.
pub fn stage1_bank() -> QuestionBank {
    QuestionBank::new(vec![
        q(
            "Q1",
            "In the AI era, the source of strength lies less in narrow specialization than in \
             creating new value by integrating different fields.",
            ADAPTATION,
            "Openness & integrative thinking",
            &[(FV, 3), (AT, 3), (HC, 1), (GS, 1)],
        ),
        q(
            "Q2",
            "With new technology, I would rather try it early and explore uses than wait for it \
             to prove stable.",
            ADAPTATION,
            "Novelty seeking",
            &[(FV, 3), (AT, 2), (HC, 1), (GS, 1)],
        ),
        q(
            "Q3",
            "I treat project changes as a chance to explore new directions rather than a \
             disruption to recover from.",
            ADAPTATION,
            "Change adaptability",
            &[(FV, 3), (AT, 1), (GS, 2)],
        ),
        q(
            "Q4",
            "I value logically optimal answers derived from data analysis over sparks of \
             creative inspiration.",
            ADAPTATION,
            "Analysis vs creativity",
            &[(VA, 3), (MB, 2), (GS, 3)],
        ),
        q(
            "Q5",
            "What I want from AI tools is fresh inspiration more than efficiency gains.",
            ADAPTATION,
            "View of AI tooling",
            &[(FV, 3), (AT, 3), (HC, 1)],
        ),
        q(
            "Q6",
            "Being praised as original, with a new perspective, gives me strong satisfaction.",
            ADAPTATION,
            "Creative motivation",
            &[(FV, 3), (AT, 2), (HC, 1)],
        ),
        q(
            "Q7",
            "On complex problems I first grasp the whole picture, then work through a staged, \
             logical resolution.",
            ADAPTATION,
            "Systems thinking",
            &[(AT, 1), (VA, 3), (MB, 2), (GS, 3)],
        ),
        q(
            "Q8",
            "When I meet a new concept I naturally understand it by relating it to what I \
             already know.",
            ADAPTATION,
            "Integrative learning",
            &[(FV, 2), (AT, 3), (VA, 2), (MB, 1), (GS, 1)],
        ),
        q(
            "Q9",
            "I find more joy in building concrete, workable solutions than in abstract ideas.",
            PRACTICE,
            "Practical orientation",
            &[(VA, 1), (MB, 3), (GS, 2)],
        ),
        q(
            "Q10",
            "Analyzing complex business processes and designing efficient systems is my strong \
             suit.",
            PRACTICE,
            "System design ability",
            &[(VA, 2), (MB, 3), (GS, 2)],
        ),
        q(
            "Q11",
            "Perfectionist attention to detail and reliably high-quality output are part of my \
             character.",
            PRACTICE,
            "Perfectionism",
            &[(VA, 3), (MB, 3), (GS, 1)],
        ),
        q(
            "Q12",
            "I am unusually keen on spotting inefficient processes and improving them.",
            PRACTICE,
            "Improvement drive",
            &[(VA, 1), (MB, 3), (GS, 2)],
        ),
        q(
            "Q13",
            "When adopting new tools I put stability and practicality firmly ahead of novelty.",
            PRACTICE,
            "Stability preference",
            &[(VA, 1), (HC, 1), (MB, 3), (GS, 1)],
        ),
        q(
            "Q14",
            "I deeply appreciate why procedures should be documented and standardized.",
            PRACTICE,
            "Process management",
            &[(VA, 2), (MB, 3), (GS, 2)],
        ),
        q(
            "Q15",
            "I will not let go of a technical problem until I have found the root cause.",
            PRACTICE,
            "Problem-solving tenacity",
            &[(AT, 1), (VA, 3), (MB, 3), (GS, 1)],
        ),
        q(
            "Q16",
            "I always aim for solutions that last and can be extended over the long term.",
            PRACTICE,
            "Sustainability thinking",
            &[(FV, 1), (VA, 1), (MB, 3), (GS, 3)],
        ),
        q(
            "Q17",
            "In team settings I put member relationships and a cooperative footing ahead of raw \
             efficiency.",
            INTERPERSONAL,
            "Relationship focus",
            &[(FV, 1), (AT, 1), (HC, 3)],
        ),
        q(
            "Q18",
            "Achieving something big through team cooperation satisfies me more than individual \
             results.",
            INTERPERSONAL,
            "Collective achievement",
            &[(FV, 1), (AT, 1), (HC, 3), (MB, 1), (GS, 2)],
        ),
        q(
            "Q19",
            "I notice shifts in other people's feelings quickly and accommodate them naturally.",
            INTERPERSONAL,
            "Empathy",
            &[(FV, 1), (AT, 1), (HC, 3)],
        ),
        q(
            "Q20",
            "I often end up at the center of a group, pulling people together; it suits me.",
            INTERPERSONAL,
            "Leadership",
            &[(FV, 1), (HC, 2), (MB, 1), (GS, 3)],
        ),
        q(
            "Q21",
            "When opinions clash I naturally take the mediator role, helping both sides \
             understand each other.",
            INTERPERSONAL,
            "Mediation",
            &[(HC, 3), (GS, 1)],
        ),
        q(
            "Q22",
            "Drawing diverse opinions together into consensus is my strong suit.",
            INTERPERSONAL,
            "Consensus building",
            &[(HC, 3), (GS, 2)],
        ),
        q(
            "Q23",
            "I consistently put the team's overall success ahead of my own results.",
            INTERPERSONAL,
            "Altruism",
            &[(AT, 1), (HC, 3), (GS, 1)],
        ),
        q(
            "Q24",
            "When I lead, I rely on building trust rather than exercising authority.",
            INTERPERSONAL,
            "Trust-based leadership",
            &[(FV, 1), (HC, 3), (GS, 2)],
        ),
        q(
            "Q25",
            "I prefer learning through practice as needs arise over mastering theory \
             systematically first.",
            LEARNING,
            "Hands-on learning",
            &[(FV, 3), (AT, 2), (HC, 1), (MB, 1)],
        ),
        q(
            "Q26",
            "My career goal is creating value my own way through diverse experience rather than \
             narrow specialization.",
            LEARNING,
            "Diversity orientation",
            &[(FV, 3), (AT, 3), (HC, 1)],
        ),
        q(
            "Q27",
            "The inner satisfaction of curiosity and growth is what keeps my learning going.",
            LEARNING,
            "Intrinsic learning motivation",
            &[(FV, 2), (AT, 3), (HC, 1), (GS, 1)],
        ),
        q(
            "Q28",
            "My appetite for new knowledge and skills is constant and does not switch off.",
            LEARNING,
            "Continuous learning appetite",
            &[(FV, 1), (AT, 3), (VA, 1), (GS, 1)],
        ),
        q(
            "Q29",
            "Teaching what I learn to others visibly deepens my own understanding.",
            LEARNING,
            "Learning by teaching",
            &[(FV, 1), (AT, 3), (HC, 2)],
        ),
        q(
            "Q30",
            "I particularly value the new perspectives gained from experts in other fields.",
            LEARNING,
            "Cross-boundary learning",
            &[(FV, 2), (AT, 3), (VA, 1), (HC, 1), (GS, 1)],
        ),
        q(
            "Q31",
            "I prefer free-form learning driven by interest to following a curriculum.",
            LEARNING,
            "Self-directed learning",
            &[(FV, 3), (AT, 3)],
        ),
        q(
            "Q32",
            "I weight theoretical understanding and practical application equally when learning.",
            LEARNING,
            "Integrated learning",
            &[(FV, 1), (AT, 2), (VA, 2), (MB, 2), (GS, 1)],
        ),
        q(
            "Q33",
            "Drafting a plan and executing it steadily gives me deep satisfaction.",
            STRATEGY,
            "Plan-and-execute orientation",
            &[(VA, 1), (MB, 3), (GS, 3)],
        ),
        q(
            "Q34",
            "My ideal way of working is a free, flexible environment for creativity rather than \
             stability.",
            STRATEGY,
            "Freedom preference",
            &[(FV, 3), (AT, 3), (HC, 1)],
        ),
        q(
            "Q35",
            "My strengths are creativity, empathy, and adaptability more than logic and \
             efficiency.",
            STRATEGY,
            "Soft-skill identity",
            &[(FV, 3), (AT, 2), (HC, 3)],
        ),
        q(
            "Q36",
            "I see AI as an opportunity that widens what is possible, not as a threat.",
            STRATEGY,
            "AI optimism",
            &[(FV, 3), (AT, 3), (VA, 1), (MB, 1), (GS, 2)],
        ),
        q(
            "Q37",
            "At work I value growth and challenge over stability.",
            STRATEGY,
            "Growth orientation",
            &[(FV, 3), (AT, 3), (GS, 2)],
        ),
        q(
            "Q38",
            "I often drive reform and transformation inside an organization, and I am good at \
             it.",
            STRATEGY,
            "Change leadership",
            &[(FV, 3), (AT, 1), (GS, 3)],
        ),
        q(
            "Q39",
            "Painting a long-term vision and planning the strategy to realize it is my strong \
             suit.",
            STRATEGY,
            "Strategic thinking",
            &[(FV, 1), (VA, 1), (GS, 3)],
        ),
        q(
            "Q40",
            "I constantly pursue the optimal balance between efficiency and quality.",
            STRATEGY,
            "Balance orientation",
            &[(VA, 2), (MB, 3), (GS, 3)],
        ),
        q(
            "Q41",
            "In AI adoption I care more about creating new business models and services than \
             about efficiency.",
            COLLABORATION,
            "AI innovation focus",
            &[(FV, 3), (AT, 2), (GS, 2)],
        ),
        q(
            "Q42",
            "I expect AI to transform work at the root and create new occupations, not just \
             automate parts.",
            COLLABORATION,
            "AI transformation outlook",
            &[(FV, 3), (AT, 2), (VA, 1), (GS, 2)],
        ),
        q(
            "Q43",
            "For learning about AI I prefer fresh papers and tech blogs to structured courses.",
            COLLABORATION,
            "Latest-information appetite",
            &[(FV, 2), (AT, 3), (VA, 1), (GS, 1)],
        ),
        q(
            "Q44",
            "What matters in human-AI collaboration is sparking creativity, not efficient \
             division of labor.",
            COLLABORATION,
            "Creative collaboration",
            &[(FV, 3), (AT, 2), (HC, 2)],
        ),
        q(
            "Q45",
            "My interest in and concern for AI ethics is very high.",
            COLLABORATION,
            "AI ethics awareness",
            &[(FV, 1), (AT, 2), (VA, 2), (HC, 3), (MB, 1), (GS, 1)],
        ),
        q(
            "Q46",
            "Organizing complex information and clarifying its essentials gives me deep \
             satisfaction.",
            COLLABORATION,
            "Information organization",
            &[(AT, 2), (VA, 3), (MB, 2), (GS, 1)],
        ),
    ])
}
