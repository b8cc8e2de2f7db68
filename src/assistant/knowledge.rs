//! Static facts about the site owner, rendered into the page sections and
//! consumed by the assistant responder.

/// Immutable knowledge base. Constructed once (see [`OWNER`]) and passed by
/// reference wherever facts are needed — no hidden statics, no mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeBase {
    pub name: &'static str,
    pub age: u32,
    pub grade: &'static str,
    pub traits: &'static [&'static str],
    pub tech_skills: &'static [&'static str],
    pub projects: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub goals_short: &'static [&'static str],
    pub goals_long: &'static [&'static str],
    pub why: &'static str,
}

/// The knowledge base for this site.
pub const OWNER: KnowledgeBase = KnowledgeBase {
    name: "Qaisar Zhumabay",
    age: 15,
    grade: "10th grade, Kazakhstan",
    traits: &[
        "structured thinking",
        "high learning ability",
        "turning ideas into results",
        "analytical thinking",
        "responsibility",
        "result-oriented",
    ],
    tech_skills: &[
        "Python (games, logic, algorithms)",
        "Web development: HTML, CSS, JavaScript",
        "Node.js",
        "Basics of SQL",
        "Databases and Supabase",
        "Platform/service logic",
        "UI/UX and product thinking",
    ],
    projects: &[
        "Web platforms and interactive services",
        "Game and educational projects in Python",
        "Startup ideas and online platforms",
        "Chatbots (interest in voice interfaces)",
    ],
    weaknesses: &[
        "Taking on many tasks at once → improving time planning",
        "High demands on quality → finding a balance between perfection and deadlines",
        "Tendency to do many things alone → developing teamwork/delegation",
    ],
    goals_short: &[
        "Develop portfolio",
        "International programs and internships",
        "Deepen programming and analytics",
    ],
    goals_long: &[
        "International university",
        "Technology products with social impact",
        "Grow as a professional and entrepreneur in IT",
    ],
    why: "I am interested in challenging tasks, growth and long-term results. I am open to learning and collaboration in international and professional environments.",
};
