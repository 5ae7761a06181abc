//! Server-rendered HTML for the upload form and the screening report.
//!
//! Templates live in `templates.rs`; this module fills them. Every value
//! that came from the upload or from configuration is escaped.

pub mod templates;

use std::fmt::Write;

use crate::screening::report::ScreeningReport;
use crate::screening::role_scoring::RoleScore;
use templates::{ATS_SECTION, CHART_ROW, PAGE_TEMPLATE, UPLOAD_FORM};

pub fn render_upload_page() -> String {
    page("Resume Screening", UPLOAD_FORM)
}

pub fn render_report(report: &ScreeningReport) -> String {
    let mut body = String::new();

    body.push_str(&ATS_SECTION.replace("{score}", &report.ats.total.to_string()));

    body.push_str("<h2>Role Match Percentages</h2>\n");
    body.push_str(&render_chart(&report.role_matches));

    let _ = write!(
        body,
        "<h2>Predicted Job Role</h2>\n<p class=\"primary\">{}</p>\n",
        escape_html(&report.primary_role)
    );

    body.push_str("<h2>Skills Found</h2>\n");
    if report.skills_found.is_empty() {
        body.push_str("<p>No known skills were found in this document.</p>\n");
    } else {
        body.push_str("<div class=\"skills\">");
        for skill in &report.skills_found {
            let _ = write!(body, "<span>{}</span>", escape_html(&capitalize(skill)));
        }
        body.push_str("</div>\n");
    }

    body.push_str("<h2>Skills to Master</h2>\n");
    if report.skills_to_master.is_empty() {
        body.push_str("<p>You already cover every skill listed for this role.</p>\n");
    } else {
        body.push_str("<div class=\"grid\">");
        for link in &report.skills_to_master {
            body.push_str(&link_button(&capitalize(&link.skill), &link.url));
        }
        body.push_str("</div>\n");
    }

    if !report.secondary_roles.is_empty() {
        body.push_str("<h2>Other Roles to Consider</h2>\n<ul>\n");
        for gap in &report.secondary_roles {
            let missing = if gap.missing.is_empty() {
                "nothing missing".to_string()
            } else {
                gap.missing
                    .iter()
                    .map(|s| escape_html(&capitalize(s)))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let _ = writeln!(
                body,
                "<li><strong>{}</strong>: {}</li>",
                escape_html(&gap.role),
                missing
            );
        }
        body.push_str("</ul>\n");
    }

    if !report.practice_questions.is_empty() {
        body.push_str("<h2>Practice Questions</h2>\n");
        for question in &report.practice_questions {
            body.push_str(&link_button(&question.name, &question.url));
        }
    }

    body.push_str("<p><a href=\"/\">Screen another resume</a></p>\n");

    page("Screening Report", &body)
}

fn page(title: &str, body: &str) -> String {
    PAGE_TEMPLATE
        .replace("{title}", &escape_html(title))
        .replace("{body}", body)
}

fn render_chart(rows: &[RoleScore]) -> String {
    rows.iter()
        .map(|row| {
            let percent = format!("{:.1}", row.percent);
            CHART_ROW
                .replace("{role}", &escape_html(&row.role))
                .replace("{width}", &format!("{:.0}", row.percent.clamp(0.0, 100.0)))
                .replace("{percent}", &percent)
        })
        .collect()
}

/// External links open in a new tab.
fn link_button(label: &str, url: &str) -> String {
    format!(
        "<a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape_html(url),
        escape_html(label)
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
