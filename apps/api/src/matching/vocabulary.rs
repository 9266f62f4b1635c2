//! The fixed skill vocabulary searched for in resume text.
//!
//! Declaration order is significant: `extract_skills` reports hits in this
//! order, so output stays stable regardless of where a term appears in a document.

pub static SKILL_VOCABULARY: &[&str] = &[
    "Java",
    "Python",
    "JavaScript",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Spring Boot",
    "Django",
    "Flask",
    "Express",
    "SQL",
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "Git",
    "GitHub",
    "HTML",
    "CSS",
    "Bootstrap",
    "TypeScript",
    "REST API",
    "GraphQL",
    "Machine Learning",
    "Data Science",
    "TensorFlow",
    "PyTorch",
    "C++",
    "C#",
    ".NET",
    "PHP",
    "Ruby",
    "Go",
    "Rust",
    "Agile",
    "Scrum",
    "DevOps",
    "CI/CD",
    "Jenkins",
    "Jira",
];
