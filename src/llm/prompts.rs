//! Fixed prompt templates for the four resume analyses

use std::fmt;

const TEXT_SLOT: &str = "{text}";

const SUMMARY_TEMPLATE: &str = r#"Analyze the following resume and provide a detailed professional summary.
Focus on key qualifications, experience, and overall profile:

{text}

Format your response in a clear, professional manner focusing only on the factual content.
Limit the response to 3-4 paragraphs."#;

const STRENGTH_TEMPLATE: &str = r#"Analyze the following resume and list the key strengths and notable achievements.
Format your response as bullet points:

{text}

Focus on:
- Technical skills and expertise
- Professional achievements
- Notable qualifications
- Unique value propositions

List exactly 5-7 key strengths."#;

const WEAKNESS_TEMPLATE: &str = r#"Review the following resume and provide constructive feedback for improvements.
Format your response in two sections - Areas for Improvement and Specific Recommendations:

{text}

Consider:
- Content gaps
- Format and presentation
- Missing key information
- Industry best practices

Provide 3-4 specific, actionable recommendations."#;

const JOB_SUGGESTION_TEMPLATE: &str = r#"Based on the skills, experience, and qualifications in this resume, suggest suitable job roles.
Provide specific job titles and brief explanations for why they match:

{text}

Format as bullet points with:
- Job title
- Brief explanation of fit
- Industry sector

Suggest 3-4 most relevant positions."#;

/// The four analyses, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    Summary,
    Strengths,
    Weaknesses,
    JobSuggestions,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 4] = [
        AnalysisKind::Summary,
        AnalysisKind::Strengths,
        AnalysisKind::Weaknesses,
        AnalysisKind::JobSuggestions,
    ];

    /// Key of this analysis in the emitted result.
    pub fn key(self) -> &'static str {
        match self {
            AnalysisKind::Summary => "summary",
            AnalysisKind::Strengths => "strengths",
            AnalysisKind::Weaknesses => "weaknesses",
            AnalysisKind::JobSuggestions => "jobSuggestions",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AnalysisKind::Summary => "Resume Summary",
            AnalysisKind::Strengths => "Resume Strengths",
            AnalysisKind::Weaknesses => "Resume Weaknesses and Improvements",
            AnalysisKind::JobSuggestions => "Suggested Job Titles",
        }
    }

    fn template(self) -> &'static str {
        match self {
            AnalysisKind::Summary => SUMMARY_TEMPLATE,
            AnalysisKind::Strengths => STRENGTH_TEMPLATE,
            AnalysisKind::Weaknesses => WEAKNESS_TEMPLATE,
            AnalysisKind::JobSuggestions => JOB_SUGGESTION_TEMPLATE,
        }
    }

    pub fn render(self, text: &str) -> String {
        render(self.template(), text)
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// `str::replace` scans only the template, so a `{text}` inside the body stays literal.
fn render(template: &str, text: &str) -> String {
    template.replace(TEXT_SLOT, text)
}

/// 3-4 paragraph factual professional summary.
pub fn summary_prompt(text: &str) -> String {
    AnalysisKind::Summary.render(text)
}

/// 5-7 bullet-point strengths.
pub fn strength_prompt(text: &str) -> String {
    AnalysisKind::Strengths.render(text)
}

/// Areas for Improvement and Specific Recommendations, 3-4 items.
pub fn weakness_prompt(text: &str) -> String {
    AnalysisKind::Weaknesses.render(text)
}

/// 3-4 job titles with fit rationale and industry sector.
pub fn job_suggestion_prompt(text: &str) -> String {
    AnalysisKind::JobSuggestions.render(text)
}
