//! Key findings pulled out of an executive summary.
//!
//! The summary is free text written by a language model, so this is a
//! line scanner keyed on the section headings and numbering the prompt asks
//! for, in Thai or English.

use serde::{Deserialize, Serialize};

const MAX_FINDINGS: usize = 3;

const SECTION_START: &[&str] = &["ข้อค้นพบสำคัญ", "Key Findings"];
const SECTION_END: &[&str] = &["คำแนะนำ", "Recommendations", "Insights เชิงลึก"];
const FINDING_MARKERS: &[&str] = &["1.", "2.", "3.", "**1.", "**2.", "**3."];
const OPPORTUNITY_MARKERS: &[&str] = &["โอกาส", "Opportunity"];
/// Lines that stop an opportunity from running on
const CONTINUATION_STOPS: &[&str] = &[
    "1.",
    "2.",
    "3.",
    "**",
    "###",
    "##",
    "โอกาส",
    "Opportunity",
];
/// Lines after an opportunity that may continue it
const MAX_CONTINUATION_LINES: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFinding {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub opportunity: String,
}

fn contains_any(line: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| line.contains(needle))
}

fn starts_with_any(line: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| line.starts_with(prefix))
}

/// Extract up to three numbered findings from the key-findings section.
pub fn extract_key_findings(summary: &str) -> Vec<KeyFinding> {
    let lines: Vec<&str> = summary.split('\n').collect();
    let mut findings = Vec::new();
    let mut current: Option<KeyFinding> = None;
    let mut in_section = false;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();
        i += 1;

        if contains_any(line, SECTION_START) {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if contains_any(line, SECTION_END) {
            break;
        }

        if starts_with_any(trimmed, FINDING_MARKERS) {
            findings.extend(current.take());
            current = Some(KeyFinding {
                title: trimmed.replace("**", "").trim().to_string(),
                ..KeyFinding::default()
            });
        } else if let Some(finding) = current.as_mut() {
            if contains_any(line, OPPORTUNITY_MARKERS) {
                let mut opportunity = line
                    .split_once(':')
                    .map(|(_, rest)| rest.trim().to_string())
                    .unwrap_or_default();
                let limit = (i + MAX_CONTINUATION_LINES).min(lines.len());
                while i < limit {
                    let next = lines[i].trim();
                    if next.is_empty() || starts_with_any(next, CONTINUATION_STOPS) {
                        break;
                    }
                    opportunity.push(' ');
                    opportunity.push_str(next);
                    i += 1;
                }
                finding.opportunity = opportunity.trim().to_string();
            } else if !trimmed.is_empty() {
                let text = trimmed.strip_prefix('-').map_or(trimmed, str::trim);
                if !finding.description.is_empty() {
                    finding.description.push(' ');
                }
                finding.description.push_str(text);
            }
        }
    }

    findings.extend(current);
    for finding in &mut findings {
        finding.description = finding.description.trim().to_string();
    }
    findings.truncate(MAX_FINDINGS);

    log::debug!("extracted {} key findings", findings.len());
    findings
}
