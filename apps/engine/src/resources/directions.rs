#![allow(dead_code)]

//! Profession-to-direction resolution.
//!
//! The provider returns free-form profession names ("React-разработчик",
//! "Senior Python Developer", …); the catalog is keyed by a fixed set of
//! canonical direction names. Resolution: exact table row, then ordered
//! keyword rules on the lowercased name, then the default track.

/// Fallback when nothing matches. Deliberate never-empty policy so
/// selection always has candidates.
pub const DEFAULT_DIRECTION: &str = "Frontend-разработчик";

/// Exact profession names and the catalog directions they map to.
/// Lookup is case-sensitive; near-misses fall through to the keyword
/// rules below.
const PROFESSION_MAP: &[(&str, &[&str])] = &[
    // Python
    ("Python-разработчик", &["Python-разработчик"]),
    ("Backend-разработчик", &["Python-разработчик"]),
    ("Django разработчик", &["Python-разработчик"]),
    ("Flask разработчик", &["Python-разработчик"]),
    // Frontend
    ("Frontend-разработчик", &["Frontend-разработчик"]),
    ("React-разработчик", &["Frontend-разработчик"]),
    ("Vue-разработчик", &["Frontend-разработчик"]),
    ("JavaScript-разработчик", &["Frontend-разработчик"]),
    ("Web-разработчик", &["Frontend-разработчик", "Fullstack-разработчик"]),
    // Data
    ("Data Analyst", &["Data Analyst"]),
    ("Аналитик данных", &["Data Analyst"]),
    ("Дата-аналитик", &["Data Analyst"]),
    ("Бизнес-аналитик", &["Data Analyst"]),
    // QA
    ("QA-инженер", &["QA-инженер"]),
    ("Тестировщик", &["QA-инженер"]),
    ("QA Engineer", &["QA-инженер"]),
    ("Инженер по тестированию", &["QA-инженер"]),
    // Design
    ("UI/UX Designer", &["UI/UX Designer"]),
    ("UI/UX дизайнер", &["UI/UX Designer"]),
    ("Дизайнер интерфейсов", &["UI/UX Designer"]),
    ("Продуктовый дизайнер", &["UI/UX Designer"]),
    // AI / Prompt
    ("Prompt Engineer", &["Prompt Engineer"]),
    ("Prompt-инженер", &["Prompt Engineer"]),
    ("AI-специалист", &["Prompt Engineer", "Machine Learning Engineer"]),
    // DevOps
    ("DevOps Engineer", &["DevOps Engineer"]),
    ("DevOps-инженер", &["DevOps Engineer"]),
    ("Системный администратор", &["DevOps Engineer"]),
    // Mobile
    ("Mobile Developer (Kotlin)", &["Mobile Developer (Kotlin)"]),
    ("Android-разработчик", &["Mobile Developer (Kotlin)"]),
    ("Kotlin-разработчик", &["Mobile Developer (Kotlin)"]),
    // Game dev
    ("Game Developer (Unity/C#)", &["Game Developer (Unity/C#)"]),
    ("Разработчик игр", &["Game Developer (Unity/C#)"]),
    ("Unity-разработчик", &["Game Developer (Unity/C#)"]),
    // Architecture
    ("System Architect", &["System Architect"]),
    ("Системный архитектор", &["System Architect"]),
    ("Архитектор ПО", &["System Architect"]),
    ("Software Architect", &["System Architect"]),
    // Fullstack
    ("Fullstack-разработчик", &["Fullstack-разработчик"]),
    ("Full-stack Developer", &["Fullstack-разработчик"]),
    ("Full Stack разработчик", &["Fullstack-разработчик"]),
    // Blockchain
    ("Blockchain Developer", &["Blockchain Developer"]),
    ("Blockchain-разработчик", &["Blockchain Developer"]),
    ("Web3-разработчик", &["Blockchain Developer"]),
    // ML
    ("Machine Learning Engineer", &["Machine Learning Engineer"]),
    ("ML-инженер", &["Machine Learning Engineer"]),
    ("Инженер машинного обучения", &["Machine Learning Engineer"]),
    ("Data Scientist", &["Machine Learning Engineer", "Data Analyst"]),
    // iOS
    ("iOS Developer (Swift)", &["iOS Developer (Swift)"]),
    ("iOS-разработчик", &["iOS Developer (Swift)"]),
    ("Swift-разработчик", &["iOS Developer (Swift)"]),
];

/// Ordered keyword rules for names outside the exact table. The first
/// rule whose keyword occurs in the lowercased profession wins, so the
/// order is part of the contract.
const KEYWORD_RULES: &[(&[&str], &str)] = &[
    (&["python", "backend"], "Python-разработчик"),
    (&["frontend", "react", "javascript"], "Frontend-разработчик"),
    (&["дата", "data", "аналит"], "Data Analyst"),
    (&["qa", "тест"], "QA-инженер"),
    (&["дизайн", "design", "ui", "ux"], "UI/UX Designer"),
    (&["prompt", "ai"], "Prompt Engineer"),
    (&["devops"], "DevOps Engineer"),
    (&["android", "kotlin"], "Mobile Developer (Kotlin)"),
    (&["игр", "game", "unity"], "Game Developer (Unity/C#)"),
    (&["архитект"], "System Architect"),
    (&["fullstack", "full stack"], "Fullstack-разработчик"),
    (&["blockchain", "web3"], "Blockchain Developer"),
    (&["machine learning", "ml", "машинн"], "Machine Learning Engineer"),
    (&["ios", "swift"], "iOS Developer (Swift)"),
];

/// Canonical directions for a free-form profession name. Never empty.
pub fn resolve_directions(profession: &str) -> Vec<&'static str> {
    if let Some((_, directions)) = PROFESSION_MAP.iter().find(|(name, _)| *name == profession) {
        return directions.to_vec();
    }

    let lowered = profession.to_lowercase();
    for (keywords, direction) in KEYWORD_RULES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return vec![direction];
        }
    }

    vec![DEFAULT_DIRECTION]
}
