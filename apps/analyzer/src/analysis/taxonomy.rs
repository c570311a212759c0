//! Static skill taxonomy used by the keyword fallback.
//!
//! Every table here is declaration-ordered and read-only. Order matters:
//! job-title normalization returns the first matching key, and every list
//! the fallback emits follows table order rather than resume order.

/// Required and nice-to-have skills for one canonical job role.
#[derive(Debug)]
pub struct SkillTaxonomyEntry {
    /// Canonical lowercase role key, e.g. `"software engineer"`.
    pub role: &'static str,
    pub required: &'static [&'static str],
    pub nice: &'static [&'static str],
}

/// Keywords that suggest a resume fits a role.
#[derive(Debug)]
pub struct RoleKeywordEntry {
    /// Display-cased role label.
    pub role: &'static str,
    /// Lowercase keywords tested by substring.
    pub keywords: &'static [&'static str],
}

pub const JOB_SKILLS: &[SkillTaxonomyEntry] = &[
    SkillTaxonomyEntry {
        role: "software engineer",
        required: &[
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "Git",
            "REST APIs",
            "Algorithms",
        ],
        nice: &["Docker", "AWS", "GraphQL", "Kubernetes", "CI/CD", "System Design"],
    },
    SkillTaxonomyEntry {
        role: "frontend developer",
        required: &[
            "HTML/CSS",
            "JavaScript",
            "React",
            "TypeScript",
            "Responsive Design",
            "Git",
        ],
        nice: &[
            "Next.js",
            "Tailwind CSS",
            "Figma",
            "Performance Optimization",
            "Testing (Jest)",
        ],
    },
    SkillTaxonomyEntry {
        role: "backend developer",
        required: &["Node.js", "Python", "REST APIs", "SQL", "Git", "System Design"],
        nice: &["Docker", "Kubernetes", "Redis", "Microservices", "AWS", "PostgreSQL"],
    },
    SkillTaxonomyEntry {
        role: "data scientist",
        required: &[
            "Python",
            "Machine Learning",
            "Statistics",
            "SQL",
            "Data Analysis",
            "Pandas",
            "NumPy",
        ],
        nice: &["TensorFlow", "PyTorch", "Tableau", "Apache Spark", "A/B Testing", "NLP"],
    },
    SkillTaxonomyEntry {
        role: "product manager",
        required: &[
            "Product Roadmap",
            "Agile/Scrum",
            "Stakeholder Management",
            "Data Analysis",
            "User Research",
        ],
        nice: &["SQL", "Figma", "A/B Testing", "OKRs", "Go-to-Market Strategy"],
    },
    SkillTaxonomyEntry {
        role: "ux designer",
        required: &[
            "Figma",
            "User Research",
            "Wireframing",
            "Prototyping",
            "Design Systems",
        ],
        nice: &[
            "Adobe XD",
            "Usability Testing",
            "Motion Design",
            "HTML/CSS",
            "Accessibility",
        ],
    },
    SkillTaxonomyEntry {
        role: "devops engineer",
        required: &[
            "Docker",
            "Kubernetes",
            "CI/CD",
            "Linux",
            "AWS",
            "Infrastructure as Code",
        ],
        nice: &[
            "Terraform",
            "Ansible",
            "Monitoring (Prometheus)",
            "Helm",
            "Git",
        ],
    },
    SkillTaxonomyEntry {
        role: "machine learning engineer",
        required: &[
            "Python",
            "Machine Learning",
            "TensorFlow",
            "PyTorch",
            "MLOps",
            "SQL",
        ],
        nice: &[
            "Kubernetes",
            "AWS SageMaker",
            "Feature Engineering",
            "NLP",
            "Computer Vision",
        ],
    },
    SkillTaxonomyEntry {
        role: "cybersecurity analyst",
        required: &[
            "Network Security",
            "SIEM Tools",
            "Incident Response",
            "Vulnerability Assessment",
            "Linux",
        ],
        nice: &[
            "CISSP",
            "Penetration Testing",
            "Python Scripting",
            "Forensics",
            "Cloud Security",
        ],
    },
    SkillTaxonomyEntry {
        role: "cloud architect",
        required: &[
            "AWS",
            "Azure",
            "Google Cloud",
            "Infrastructure as Code",
            "Networking",
            "Security",
        ],
        nice: &[
            "Terraform",
            "Kubernetes",
            "Cost Optimization",
            "Multi-cloud",
            "Serverless",
        ],
    },
];

pub const ROLE_KEYWORDS: &[RoleKeywordEntry] = &[
    RoleKeywordEntry {
        role: "Software Engineer",
        keywords: &[
            "javascript",
            "typescript",
            "react",
            "node",
            "python",
            "java",
            "algorithms",
            "api",
        ],
    },
    RoleKeywordEntry {
        role: "Frontend Developer",
        keywords: &[
            "html",
            "css",
            "javascript",
            "react",
            "vue",
            "angular",
            "ui",
            "responsive",
        ],
    },
    RoleKeywordEntry {
        role: "Backend Developer",
        keywords: &[
            "node",
            "python",
            "java",
            "sql",
            "api",
            "server",
            "database",
            "microservices",
        ],
    },
    RoleKeywordEntry {
        role: "Data Scientist",
        keywords: &[
            "python",
            "machine learning",
            "data",
            "statistics",
            "sql",
            "pandas",
            "model",
        ],
    },
    RoleKeywordEntry {
        role: "Data Analyst",
        keywords: &[
            "sql",
            "excel",
            "tableau",
            "data",
            "analysis",
            "reporting",
            "power bi",
        ],
    },
    RoleKeywordEntry {
        role: "Product Manager",
        keywords: &[
            "product",
            "roadmap",
            "agile",
            "stakeholder",
            "strategy",
            "launch",
            "metrics",
        ],
    },
    RoleKeywordEntry {
        role: "UX Designer",
        keywords: &[
            "design",
            "figma",
            "prototype",
            "user research",
            "wireframe",
            "ux",
            "ui",
        ],
    },
    RoleKeywordEntry {
        role: "DevOps Engineer",
        keywords: &[
            "docker",
            "kubernetes",
            "ci/cd",
            "linux",
            "aws",
            "deployment",
            "infrastructure",
        ],
    },
    RoleKeywordEntry {
        role: "Cloud Engineer",
        keywords: &[
            "aws",
            "azure",
            "gcp",
            "cloud",
            "terraform",
            "infrastructure",
            "serverless",
        ],
    },
    RoleKeywordEntry {
        role: "Cybersecurity Analyst",
        keywords: &[
            "security",
            "network",
            "vulnerability",
            "incident",
            "firewall",
            "siem",
        ],
    },
];

/// Master catalog scanned for `currentSkills`.
pub const SKILL_CATALOG: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "SQL",
    "HTML/CSS",
    "Git",
    "Docker",
    "AWS",
    "GraphQL",
    "REST APIs",
    "Machine Learning",
    "Kubernetes",
    "CI/CD",
    "Agile/Scrum",
    "Figma",
    "PostgreSQL",
    "Redis",
    "Next.js",
    "Vue",
    "Angular",
    "Tailwind CSS",
    "Linux",
    "TensorFlow",
    "PyTorch",
    "Data Analysis",
    "Statistics",
    "Pandas",
    "NumPy",
    "Excel",
    "Tableau",
    "Product Roadmap",
    "Stakeholder Management",
    "User Research",
    "Wireframing",
];

pub const GENERAL_STRENGTHS: &[&str] = &[
    "Clear and structured professional summary",
    "Quantified achievements with measurable results",
    "Consistent and clean formatting throughout",
    "Strong use of action verbs and impact statements",
    "Relevant certifications or education included",
    "Well-organized work experience timeline",
];

pub const GENERAL_IMPROVEMENTS: &[&str] = &[
    "Add more measurable outcomes to your job experiences",
    "Include a LinkedIn or portfolio URL",
    "Tailor keywords to match each job description",
    "Expand on leadership or cross-functional collaboration",
    "Add a professional summary if not present",
    "Consider adding relevant certifications",
];

/// Substituted when no role in `ROLE_KEYWORDS` qualifies.
pub const DEFAULT_SUITED_ROLES: &[&str] = &["General Administrative Role", "Technical Support"];

/// Gap placeholders for job titles the taxonomy does not know.
pub const UNKNOWN_ROLE_SKILLS_TO_ACQUIRE: &[&str] = &[
    "Domain-specific knowledge",
    "Industry certifications",
    "Relevant tools & software",
];

pub const UNKNOWN_ROLE_SUGGESTED_SKILLS: &[&str] = &[
    "Communication",
    "Project Management",
    "Data-driven decision making",
];

/// Looks up a canonical role key produced by the job-title normalizer.
pub fn lookup(role_key: &str) -> Option<&'static SkillTaxonomyEntry> {
    JOB_SKILLS.iter().find(|entry| entry.role == role_key)
}
