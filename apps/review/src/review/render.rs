use crate::review::ats::{ATS_CLOSING, ATS_DESCRIPTION, ATS_HEADING, ATS_SUBHEADING, AtsPanel};
use crate::review::sections::CategorySection;
use crate::review::ReviewView;

/// Renders the review as plain text.
///
/// Collapsed sections show only their header line with a `[+]` marker; open
/// sections show a `[-]` marker followed by their tips and explanations.
pub fn render_text(view: &ReviewView) -> String {
    let mut out = String::new();
    render_banner(&mut out, view);
    render_ats(&mut out, &view.ats);
    for section in &view.sections {
        render_section(&mut out, section);
    }
    out
}

fn render_banner(out: &mut String, view: &ReviewView) {
    let mut heading = String::from("Resume Review");
    if let Some(company) = &view.company_name {
        heading.push_str(&format!(" - {company}"));
    }
    if let Some(title) = &view.job_title {
        heading.push_str(&format!(" - {title}"));
    }
    out.push_str(&heading);
    out.push('\n');
    out.push_str(&format!(
        "Overall Score: {}/100 [{}]\n\n",
        view.overall.score, view.overall.label
    ));
}

fn render_ats(out: &mut String, panel: &AtsPanel) {
    out.push_str(&format!("{ATS_HEADING}: {}/100\n", panel.score));
    out.push_str(ATS_SUBHEADING);
    out.push('\n');
    out.push_str(ATS_DESCRIPTION);
    out.push('\n');
    for suggestion in &panel.suggestions {
        out.push_str(&format!(
            "  {} {}\n",
            icon_glyph(suggestion.icon),
            suggestion.tip
        ));
    }
    out.push_str(ATS_CLOSING);
    out.push_str("\n\n");
}

fn render_section(out: &mut String, section: &CategorySection) {
    let marker = if section.open { "[-]" } else { "[+]" };
    out.push_str(&format!(
        "{marker} {} - {}/100 [{}]\n",
        section.title, section.badge.score, section.badge.label
    ));
    if !section.open {
        return;
    }
    for tip in &section.tips {
        out.push_str(&format!("    {} {}\n", icon_glyph(tip.icon), tip.summary));
        out.push_str(&format!("      {}\n", tip.explanation));
    }
}

/// Terminal stand-ins for the icon tokens the view carries.
fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "check" | "ats-good" => "✓",
        "warning" | "ats-warning" => "!",
        "cross" | "ats-bad" => "✗",
        _ => "•",
    }
}
