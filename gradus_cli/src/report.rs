//! Plain-text rendering of a student's summary.

use gradus_core::Summary;

pub fn render_summary(summary: &Summary) -> String {
    let mut lines = vec![format!("Summary for {}", summary.username), String::new()];

    lines.push("Standards:".to_string());
    if summary.standards.is_empty() {
        lines.push("  (none recorded yet)".to_string());
    }
    for standard in &summary.standards {
        lines.push(format!(
            "  - {} | Level {} | {} credits | {}",
            standard.title(),
            standard.level(),
            standard.credits(),
            standard.grade()
        ));
    }

    lines.push(String::new());
    lines.push(format!("Total credits: {}", summary.total_credits));
    lines.push(format!(
        "Credits by level: {}",
        summary
            .credits_by_level
            .iter()
            .map(|(level, credits)| format!("L{} {}", level, credits))
            .collect::<Vec<_>>()
            .join(" | ")
    ));
    lines.push(format!(
        "Credits by grade: {}",
        summary
            .credits_by_grade
            .iter()
            .map(|(grade, credits)| format!("{} {}", grade, credits))
            .collect::<Vec<_>>()
            .join(" | ")
    ));

    lines.push(String::new());
    if summary.interests.is_empty() {
        lines.push("Interests: (none yet)".to_string());
    } else {
        lines.push(format!("Interests: {}", summary.interests.join(", ")));
    }

    lines.push("Career suggestions:".to_string());
    for career in &summary.careers {
        lines.push(format!("  - {}", career));
    }

    lines.join("\n")
}
