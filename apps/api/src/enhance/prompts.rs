// Canned outputs for the heuristic enhancer.
// Reproduced verbatim; callers and tests compare against these constants.

/// Returned whenever the content mentions software or developer work.
pub const SOFTWARE_IMPROVEMENT: &str = "\
• Architected and implemented scalable solutions using modern technologies, improving system performance by 40%
• Led development of key features from conception through deployment, ensuring code quality and best practices
• Collaborated with product managers and designers to translate business requirements into technical specifications
• Mentored junior developers and conducted code reviews, fostering a culture of technical excellence";

/// Canned improvement for the `summary` field.
pub const SUMMARY_IMPROVEMENT: &str = "Results-driven professional with proven expertise in delivering high-impact solutions across diverse industries. Known for combining technical excellence with strategic thinking to drive organizational success. Adept at fostering collaborative relationships and leading cross-functional teams to exceed performance targets.";

/// Canned improvement for the `description` field.
pub const DESCRIPTION_IMPROVEMENT: &str = "\
• Spearheaded strategic initiatives that resulted in measurable improvements in operational efficiency and stakeholder satisfaction
• Collaborated with cross-functional teams to deliver innovative solutions, ensuring alignment with business objectives
• Demonstrated expertise in problem-solving and critical thinking, consistently exceeding performance metrics
• Mentored junior team members, fostering a culture of continuous improvement and professional development";

/// Case-insensitive substrings that select `SOFTWARE_IMPROVEMENT`.
pub const SOFTWARE_KEYWORDS: [&str; 2] = ["software", "developer"];

pub const GENERIC_PREFIX: &str = "Enhanced version: ";

pub const GENERIC_SUFFIX: &str = "\n\nProfessionally refined with attention to impact, clarity, and industry best practices. Emphasizes measurable achievements and demonstrates clear value proposition to potential employers.";
