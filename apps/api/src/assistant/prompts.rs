// All LLM prompt templates for the assistant pipelines.
// Filled with llm_client::prompts::render; formatting instructions come from output_parser.

/// Job description analysis prompt.
/// Replace: {job_description}, {format_instructions}
pub const JOB_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following job description and extract structured information.

Job Description:
{job_description}

{format_instructions}

Provide the extracted information in the specified JSON format."#;

/// Resume suggestion prompt.
/// Replace: {job_title}, {required_skills}, {experience_required}, {tools},
///          {current_resume}, {format_instructions}
pub const RESUME_SUGGESTION_PROMPT_TEMPLATE: &str = r#"Based on the job requirements and current resume, generate improvement suggestions.

Job Requirements:
- Title: {job_title}
- Skills needed: {required_skills}
- Experience: {experience_required} years
- Tools: {tools}

Current Resume:
{current_resume}

{format_instructions}

Provide structured suggestions to improve the resume for this job position."#;

/// Cover letter prompt. Output is plain text, never parsed.
/// Replace: {candidate_name}, {job_title}, {company_name}, {key_achievements}, {job_requirements}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter for the following position:

Candidate Name: {candidate_name}
Job Title: {job_title}
Company: {company_name}

Key Achievements:
{key_achievements}

Job Requirements:
{job_requirements}

Instructions:
- Write a compelling cover letter (300-400 words)
- Highlight relevant experience
- Match key requirements from job description
- Use professional tone
- Include specific examples from achievements
- Output only the cover letter text, no JSON or formatting markers

Cover Letter:"#;
