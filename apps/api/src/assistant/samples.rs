// Fixed inputs used by the demo walkthrough.

use crate::assistant::cover_letter::CoverLetterRequest;

pub const SAMPLE_JOB_DESCRIPTION: &str = r#"
    Senior Python Developer

    We are looking for a Senior Python Developer with 5+ years of experience.

    Required Skills:
    - Python (Django, FastAPI, Flask)
    - PostgreSQL and Redis
    - Docker and Kubernetes
    - AWS (EC2, S3, Lambda)
    - RESTful API design

    Responsibilities:
    - Design and develop scalable web applications
    - Lead code reviews and mentor junior developers
    - Optimize database performance
    - Collaborate with DevOps team

    Soft Skills:
    - Strong communication
    - Team player
    - Problem-solving
    - Leadership experience
"#;

pub const SAMPLE_RESUME: &str = r#"
    JOHN DOE
    john.doe@email.com | linkedin.com/in/johndoe

    EXPERIENCE:
    Python Developer at Tech Corp (3 years)
    - Developed REST APIs using Flask
    - Worked with MySQL databases
    - Basic Docker experience

    Junior Developer at Startup (2 years)
    - Built web applications
    - Fixed bugs and optimized code

    SKILLS:
    - Python, JavaScript
    - Flask, Django
    - MySQL
    - Git
"#;

const SAMPLE_ACHIEVEMENTS: &str = r#"
    - Led development of 3 REST APIs serving 100K+ users
    - Optimized database queries reducing response time by 40%
    - Mentored 2 junior developers
    - Implemented CI/CD pipelines using Docker
"#;

pub fn sample_cover_letter_request() -> CoverLetterRequest {
    CoverLetterRequest {
        candidate_name: "John Doe".to_string(),
        job_title: "Senior Python Developer".to_string(),
        company_name: "Tech Corp".to_string(),
        key_achievements: SAMPLE_ACHIEVEMENTS.to_string(),
        job_requirements: "Python, Django, FastAPI, PostgreSQL, Redis, Docker, AWS".to_string(),
    }
}
