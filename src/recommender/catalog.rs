//! Career Catalog
//!
//! The fixed, ordered list of career profiles consumed by the matching
//! engine. Constructed once at startup and never mutated afterwards.

use super::types::CareerProfile;

/// The default catalog of career profiles
pub fn default_catalog() -> Vec<CareerProfile> {
    vec![
        CareerProfile {
            title: "Software Engineer".to_string(),
            description: "Develop and maintain software applications and systems".to_string(),
            required_skills: vec![
                "Python".to_string(),
                "JavaScript".to_string(),
                "SQL".to_string(),
                "Git".to_string(),
            ],
            industry: "Technology".to_string(),
            salary_range: "$70k - $130k".to_string(),
            match_keywords: vec![
                "python".to_string(),
                "javascript".to_string(),
                "programming".to_string(),
                "coding".to_string(),
                "software".to_string(),
                "development".to_string(),
            ],
        },
        CareerProfile {
            title: "Data Scientist".to_string(),
            description: "Analyze complex data to help organizations make decisions".to_string(),
            required_skills: vec![
                "Python".to_string(),
                "Machine Learning".to_string(),
                "Statistics".to_string(),
                "SQL".to_string(),
                "Data Analysis".to_string(),
            ],
            industry: "Technology/Analytics".to_string(),
            salary_range: "$80k - $150k".to_string(),
            match_keywords: vec![
                "python".to_string(),
                "machine learning".to_string(),
                "data".to_string(),
                "statistics".to_string(),
                "analytics".to_string(),
                "sql".to_string(),
            ],
        },
        CareerProfile {
            title: "Frontend Developer".to_string(),
            description: "Create user interfaces and web experiences".to_string(),
            required_skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "HTML".to_string(),
                "CSS".to_string(),
                "UI/UX Design".to_string(),
            ],
            industry: "Technology".to_string(),
            salary_range: "$60k - $120k".to_string(),
            match_keywords: vec![
                "javascript".to_string(),
                "react".to_string(),
                "html".to_string(),
                "css".to_string(),
                "frontend".to_string(),
                "ui".to_string(),
                "ux".to_string(),
            ],
        },
        CareerProfile {
            title: "Product Manager".to_string(),
            description: "Lead product development and strategy".to_string(),
            required_skills: vec![
                "Project Management".to_string(),
                "Business Analysis".to_string(),
                "Communication".to_string(),
                "Strategy".to_string(),
            ],
            industry: "Technology/Business".to_string(),
            salary_range: "$90k - $160k".to_string(),
            match_keywords: vec![
                "management".to_string(),
                "product".to_string(),
                "strategy".to_string(),
                "business".to_string(),
                "communication".to_string(),
            ],
        },
        CareerProfile {
            title: "Digital Marketing Specialist".to_string(),
            description: "Develop and execute digital marketing campaigns".to_string(),
            required_skills: vec![
                "Digital Marketing".to_string(),
                "SEO".to_string(),
                "Social Media".to_string(),
                "Analytics".to_string(),
                "Content Creation".to_string(),
            ],
            industry: "Marketing".to_string(),
            salary_range: "$45k - $85k".to_string(),
            match_keywords: vec![
                "marketing".to_string(),
                "seo".to_string(),
                "social media".to_string(),
                "analytics".to_string(),
                "content".to_string(),
            ],
        },
        CareerProfile {
            title: "DevOps Engineer".to_string(),
            description: "Manage infrastructure and deployment pipelines".to_string(),
            required_skills: vec![
                "AWS".to_string(),
                "Docker".to_string(),
                "Python".to_string(),
                "Linux".to_string(),
                "CI/CD".to_string(),
            ],
            industry: "Technology".to_string(),
            salary_range: "$75k - $140k".to_string(),
            match_keywords: vec![
                "aws".to_string(),
                "docker".to_string(),
                "devops".to_string(),
                "linux".to_string(),
                "automation".to_string(),
                "cloud".to_string(),
            ],
        },
        CareerProfile {
            title: "UX Designer".to_string(),
            description: "Design user experiences for digital products".to_string(),
            required_skills: vec![
                "UI/UX Design".to_string(),
                "Figma".to_string(),
                "User Research".to_string(),
                "Prototyping".to_string(),
            ],
            industry: "Design/Technology".to_string(),
            salary_range: "$55k - $110k".to_string(),
            match_keywords: vec![
                "design".to_string(),
                "ux".to_string(),
                "ui".to_string(),
                "figma".to_string(),
                "prototyping".to_string(),
                "user".to_string(),
            ],
        },
        CareerProfile {
            title: "Business Analyst".to_string(),
            description: "Analyze business processes and recommend improvements".to_string(),
            required_skills: vec![
                "Business Analysis".to_string(),
                "SQL".to_string(),
                "Excel".to_string(),
                "Project Management".to_string(),
            ],
            industry: "Business/Consulting".to_string(),
            salary_range: "$55k - $95k".to_string(),
            match_keywords: vec![
                "business".to_string(),
                "analysis".to_string(),
                "sql".to_string(),
                "excel".to_string(),
                "consulting".to_string(),
            ],
        },
        CareerProfile {
            title: "Machine Learning Engineer".to_string(),
            description: "Build and deploy machine learning models".to_string(),
            required_skills: vec![
                "Python".to_string(),
                "Machine Learning".to_string(),
                "TensorFlow".to_string(),
                "AWS".to_string(),
                "Statistics".to_string(),
            ],
            industry: "Technology/AI".to_string(),
            salary_range: "$90k - $170k".to_string(),
            match_keywords: vec![
                "machine learning".to_string(),
                "python".to_string(),
                "tensorflow".to_string(),
                "ai".to_string(),
                "deep learning".to_string(),
            ],
        },
        CareerProfile {
            title: "Full Stack Developer".to_string(),
            description: "Develop both frontend and backend applications".to_string(),
            required_skills: vec![
                "JavaScript".to_string(),
                "Node.js".to_string(),
                "React".to_string(),
                "SQL".to_string(),
                "Python".to_string(),
            ],
            industry: "Technology".to_string(),
            salary_range: "$65k - $125k".to_string(),
            match_keywords: vec![
                "javascript".to_string(),
                "node.js".to_string(),
                "react".to_string(),
                "fullstack".to_string(),
                "full stack".to_string(),
                "backend".to_string(),
            ],
        },
    ]
}
