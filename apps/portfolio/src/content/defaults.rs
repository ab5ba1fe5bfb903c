use crate::models::{
    CertificationEntry, EducationEntry, ExperienceEntry, Portfolio, Profile, ProjectEntry,
    SkillEntry, SocialLink,
};

const SKILLS: &[(&str, i32)] = &[
    ("Transformers & Tokenizers", 90),
    ("Prompt Engineering & PEFT", 85),
    ("Fine-tuning (LoRA, RLHF…)", 80),
    ("PyTorch / TensorFlow", 85),
    ("Scikit-Learn", 80),
    ("CNN / RNN / MLP", 75),
    ("Python / MicroPython", 95),
    ("C / C++ / JavaScript", 75),
    ("SQL / NoSQL", 80),
    ("LangChain / HuggingFace", 80),
    ("Symbolic & Multi-Agent AI", 70),
];

const SOCIALS: &[(&str, &str)] = &[
    ("LinkedIn", "https://www.linkedin.com/in/your-handle"),
    ("GitHub", "https://github.com/your-handle"),
    ("Kaggle", "https://www.kaggle.com/your-handle"),
];

// (role, company, period, details)
const EXPERIENCE: &[(&str, &str, &str, &str)] = &[
    (
        "AI Engineer Intern (LLM fine-tuning)",
        "University Research Lab",
        "Apr 2025 – Present",
        "Fine-tuned and evaluated large language models for pedagogical content, \
         preprocessed and structured educational datasets, \
         explored multi-agent knowledge integration.",
    ),
    (
        "Embedded Systems Intern",
        "Signal Processing Lab",
        "Apr 2024 – Oct 2024",
        "Developed and optimized real-time analog signal acquisition firmware, \
         implemented autonomous sampling modes and synchronization.",
    ),
    (
        "Full-Stack Web Dev Intern",
        "Regional Telecom Operator",
        "Oct 2022 – Apr 2023",
        "Built a responsive web application, \
         implemented new features and optimizations, \
         authored technical documentation.",
    ),
];

// (title, description, period)
const PROJECTS: &[(&str, &str, &str)] = &[
    (
        "Image Dimensionality Reduction",
        "Research project on image dimensionality reduction. Application of advanced \
         compression and optimization techniques to maintain quality while significantly \
         reducing data size.",
        "Since September 2023",
    ),
    (
        "XAI for Medical Error Detection",
        "Development of an explainable AI (XAI) system for detecting medical prescription \
         errors. Focus on algorithmic decision transparency in medical context.",
        "Since September 2023",
    ),
    (
        "Hospital Resource Optimization",
        "Implementation of metaheuristic algorithms to optimize human and material resource \
         management in hospitals. Improvement of operational efficiency and cost reduction.",
        "Since September 2023",
    ),
    (
        "Augmented Reality Project",
        "Design and development of an augmented reality solution integrated into smart \
         glasses. Focus on user experience and seamless integration of AR technology.",
        "Since September 2023",
    ),
    (
        "Automated AI Prompt Validation",
        "Research on automation and validation of AI prompts compared to human medical \
         expertise. Development of evaluation metrics and validation framework.",
        "Since September 2023",
    ),
    (
        "Emergency Wait Time Optimization",
        "Developed an AI model for emergency time optimization using machine learning \
         algorithms (linear regression) and deep learning (MLP).",
        "December 2023 to March 2024",
    ),
    (
        "Alzheimer Detection Application",
        "Development of a native application for people with Alzheimer's disease, using \
         logical trees for early disease detection. Built with React Native and Firebase.",
        "January 2023 to July 2023",
    ),
];

// (degree, school, period, location)
const EDUCATION: &[(&str, &str, &str, &str)] = &[
    (
        "Master in AI Management",
        "Graduate School of Engineering",
        "Sep 2023 – Oct 2025",
        "Lille, France",
    ),
    (
        "Bachelor in Computer Systems",
        "State University",
        "Sep 2020 – Jun 2023",
        "El Tarf, Algeria",
    ),
];

const CERTIFICATIONS: &[(&str, &str, &str)] = &[(
    "TensorFlow Developer Certificate",
    "Google / Udemy",
    "Dec 2024",
)];

const ABOUT: &str = "I'm an AI Engineer specialized in NLP & LLM, with hands-on expertise in \
fine-tuning, model evaluation, and prompt engineering. I build scalable language-driven \
solutions that turn unstructured text into actionable insights and power next-gen generative \
AI products for innovative teams.";

/// The content the page ships with when no `CONTENT_PATH` is configured.
pub fn default_portfolio() -> Portfolio {
    Portfolio {
        page_title: "Portfolio · AI Engineer".to_string(),
        profile: Profile {
            name: "Your Name".to_string(),
            role: "AI Engineer – NLP & LLM Specialist".to_string(),
            tagline: "Building scalable language-driven solutions for real-world impact"
                .to_string(),
            email: "you@example.com".to_string(),
            phone: "+33 6 00 00 00 00".to_string(),
            location: "France".to_string(),
            about: ABOUT.to_string(),
        },
        skills: SKILLS
            .iter()
            .map(|(name, pct)| SkillEntry {
                name: name.to_string(),
                percentage: *pct,
            })
            .collect(),
        experience: EXPERIENCE
            .iter()
            .map(|(role, company, period, details)| ExperienceEntry {
                role: role.to_string(),
                company: company.to_string(),
                period: period.to_string(),
                details: details.to_string(),
            })
            .collect(),
        projects: PROJECTS
            .iter()
            .map(|(title, description, period)| ProjectEntry {
                title: title.to_string(),
                description: description.to_string(),
                period: period.to_string(),
            })
            .collect(),
        education: EDUCATION
            .iter()
            .map(|(degree, school, period, location)| EducationEntry {
                degree: degree.to_string(),
                school: school.to_string(),
                period: period.to_string(),
                location: location.to_string(),
            })
            .collect(),
        certifications: CERTIFICATIONS
            .iter()
            .map(|(title, issuer, date)| CertificationEntry {
                title: title.to_string(),
                issuer: issuer.to_string(),
                date: date.to_string(),
            })
            .collect(),
        socials: SOCIALS
            .iter()
            .map(|(label, url)| SocialLink {
                label: label.to_string(),
                url: url.to_string(),
            })
            .collect(),
        footer_credit: Some("Made with ❤️ + Rust".to_string()),
        copyright_year: None,
    }
}
