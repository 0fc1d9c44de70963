//! The five fixed resume layouts.
//!
//! Each layout builds its own HTML structure and contributes a flattened
//! line sequence for export. Emoji and glyph decorations stay in the HTML
//! only; exported lines are plain text so the built-in PDF faces can always
//! draw them.

use super::{Line, LineKind, esc};
use crate::models::resumes::ResumeContent;

/// Splits multi-line free text into trimmed, non-empty export lines.
fn push_body_lines(lines: &mut Vec<Line>, text: &str) {
    for part in text.lines().map(str::trim).filter(|p| !p.is_empty()) {
        lines.push(Line::new(LineKind::Body, part));
    }
}

/// Renders multi-line free text as HTML, one `<br>` per line break.
fn multiline_html(text: &str) -> String {
    text.lines()
        .map(|l| esc(l.trim()))
        .collect::<Vec<_>>()
        .join("<br>")
}

fn contact_parts(c: &ResumeContent) -> Vec<String> {
    [&c.email, &c.phone, &c.location]
        .into_iter()
        .flatten()
        .map(|v| v.to_string())
        .collect()
}

/// Serif single column with ruled section headings.
pub(super) fn classic(c: &ResumeContent) -> (String, Vec<Line>) {
    let mut html = String::from("<div class=\"resume classic\">\n<header>\n");
    let mut lines = Vec::new();

    if let Some(name) = &c.name {
        html.push_str(&format!("<h1>{}</h1>\n", esc(name)));
        lines.push(Line::new(LineKind::Title, name.clone()));
    }
    if let Some(job_title) = &c.job_title {
        html.push_str(&format!("<h2>{}</h2>\n", esc(job_title)));
        lines.push(Line::new(LineKind::Subtitle, job_title.clone()));
    }

    let contact = contact_parts(c);
    if !contact.is_empty() {
        let joined = contact.join(" | ");
        html.push_str(&format!("<p class=\"contact\">{}</p>\n", esc(&joined)));
        lines.push(Line::new(LineKind::Body, joined));
    }

    let mut links = Vec::new();
    if let Some(linkedin) = &c.linkedin {
        links.push(format!("LinkedIn: {}", linkedin));
    }
    if let Some(github) = &c.github {
        links.push(format!("GitHub: {}", github));
    }
    if !links.is_empty() {
        let joined = links.join(" | ");
        html.push_str(&format!("<p class=\"links\">{}</p>\n", esc(&joined)));
        lines.push(Line::new(LineKind::Body, joined));
    }
    html.push_str("</header>\n");

    if let Some(summary) = &c.summary {
        html.push_str(&format!(
            "<section>\n<h3>Summary</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(summary)
        ));
        lines.push(Line::new(LineKind::Heading, "Summary"));
        push_body_lines(&mut lines, summary);
    }

    let skills = c.skills_list();
    if !skills.is_empty() {
        html.push_str("<section>\n<h3>Skills</h3>\n<ul>\n");
        lines.push(Line::new(LineKind::Heading, "Skills"));
        for skill in &skills {
            html.push_str(&format!("<li>{}</li>\n", esc(skill)));
            lines.push(Line::new(LineKind::Body, format!("- {}", skill)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    if let Some(experience) = &c.experience {
        html.push_str(&format!(
            "<section>\n<h3>Experience</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(experience)
        ));
        lines.push(Line::new(LineKind::Heading, "Experience"));
        push_body_lines(&mut lines, experience);
    }

    if let Some(education) = &c.education {
        html.push_str(&format!(
            "<section>\n<h3>Education</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(education)
        ));
        lines.push(Line::new(LineKind::Heading, "Education"));
        push_body_lines(&mut lines, education);
    }

    html.push_str("</div>\n");
    (html, lines)
}

/// Banner header with skill pills.
pub(super) fn modern(c: &ResumeContent) -> (String, Vec<Line>) {
    let mut html = String::from("<div class=\"resume modern\">\n<div class=\"banner\">\n");
    let mut lines = Vec::new();

    if let Some(name) = &c.name {
        html.push_str(&format!("<h1>{}</h1>\n", esc(name)));
        lines.push(Line::new(LineKind::Title, name.clone()));
    }
    if let Some(job_title) = &c.job_title {
        html.push_str(&format!("<h2>{}</h2>\n", esc(job_title)));
        lines.push(Line::new(LineKind::Subtitle, job_title.clone()));
    }

    let mut badges = Vec::new();
    if let Some(email) = &c.email {
        badges.push(format!("&#9993; {}", esc(email)));
    }
    if let Some(phone) = &c.phone {
        badges.push(format!("&#9742; {}", esc(phone)));
    }
    if let Some(location) = &c.location {
        badges.push(format!("&#128205; {}", esc(location)));
    }
    if let Some(linkedin) = &c.linkedin {
        badges.push(format!("&#128279; {}", esc(linkedin)));
    }
    if let Some(github) = &c.github {
        badges.push(format!("&#128187; {}", esc(github)));
    }
    if !badges.is_empty() {
        html.push_str("<p class=\"contact\">");
        for badge in &badges {
            html.push_str(&format!("<span>{}</span> ", badge));
        }
        html.push_str("</p>\n");

        let mut plain: Vec<String> = contact_parts(c);
        plain.extend(c.linkedin.iter().cloned());
        plain.extend(c.github.iter().cloned());
        lines.push(Line::new(LineKind::Body, plain.join("  ")));
    }
    html.push_str("</div>\n<div class=\"body\">\n");

    if let Some(summary) = &c.summary {
        html.push_str(&format!(
            "<section>\n<h3>About Me</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(summary)
        ));
        lines.push(Line::new(LineKind::Heading, "About Me"));
        push_body_lines(&mut lines, summary);
    }

    let skills = c.skills_list();
    if !skills.is_empty() {
        html.push_str("<section>\n<h3>Skills</h3>\n<p class=\"pills\">");
        lines.push(Line::new(LineKind::Heading, "Skills"));
        for skill in &skills {
            html.push_str(&format!("<span class=\"pill\">{}</span>", esc(skill)));
        }
        html.push_str("</p>\n</section>\n");
        lines.push(Line::new(LineKind::Body, skills.join("  ")));
    }

    if let Some(experience) = &c.experience {
        html.push_str(&format!(
            "<section>\n<h3>Experience</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(experience)
        ));
        lines.push(Line::new(LineKind::Heading, "Experience"));
        push_body_lines(&mut lines, experience);
    }

    if let Some(education) = &c.education {
        html.push_str(&format!(
            "<section>\n<h3>Education</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(education)
        ));
        lines.push(Line::new(LineKind::Heading, "Education"));
        push_body_lines(&mut lines, education);
    }

    html.push_str("</div>\n</div>\n");
    (html, lines)
}

/// Centered, understated single column; skills joined with a dot separator.
pub(super) fn minimal(c: &ResumeContent) -> (String, Vec<Line>) {
    let mut html = String::from("<div class=\"resume minimal\">\n<header class=\"centered\">\n");
    let mut lines = Vec::new();

    if let Some(name) = &c.name {
        html.push_str(&format!("<h1>{}</h1>\n", esc(name)));
        lines.push(Line::new(LineKind::Title, name.clone()));
    }
    if let Some(job_title) = &c.job_title {
        html.push_str(&format!("<h2>{}</h2>\n", esc(job_title)));
        lines.push(Line::new(LineKind::Subtitle, job_title.clone()));
    }

    let contact = contact_parts(c);
    if !contact.is_empty() {
        let joined = contact.join("   ");
        html.push_str(&format!("<p class=\"contact\">{}</p>\n", esc(&joined)));
        lines.push(Line::new(LineKind::Body, joined));
    }
    html.push_str("</header>\n");

    if let Some(summary) = &c.summary {
        html.push_str(&format!(
            "<section>\n<h3 class=\"overline\">SUMMARY</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(summary)
        ));
        lines.push(Line::new(LineKind::Heading, "SUMMARY"));
        push_body_lines(&mut lines, summary);
    }

    let skills = c.skills_list();
    if !skills.is_empty() {
        let joined_html = skills
            .iter()
            .map(|s| esc(s))
            .collect::<Vec<_>>()
            .join(" &#8226; ");
        html.push_str(&format!(
            "<section>\n<h3 class=\"overline\">SKILLS</h3>\n<p>{}</p>\n</section>\n",
            joined_html
        ));
        lines.push(Line::new(LineKind::Heading, "SKILLS"));
        lines.push(Line::new(LineKind::Body, skills.join(" * ")));
    }

    if let Some(experience) = &c.experience {
        html.push_str(&format!(
            "<section>\n<h3 class=\"overline\">EXPERIENCE</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(experience)
        ));
        lines.push(Line::new(LineKind::Heading, "EXPERIENCE"));
        push_body_lines(&mut lines, experience);
    }

    if let Some(education) = &c.education {
        html.push_str(&format!(
            "<section>\n<h3 class=\"overline\">EDUCATION</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(education)
        ));
        lines.push(Line::new(LineKind::Heading, "EDUCATION"));
        push_body_lines(&mut lines, education);
    }

    html.push_str("</div>\n");
    (html, lines)
}

/// Sidebar with contact and skill bars, main column for the narrative.
pub(super) fn professional(c: &ResumeContent) -> (String, Vec<Line>) {
    let mut html = String::from("<div class=\"resume professional\">\n<aside>\n");
    let mut lines = Vec::new();

    if let Some(initial) = c.name.as_deref().and_then(|n| n.chars().next()) {
        html.push_str(&format!("<div class=\"avatar\">{}</div>\n", esc(&initial.to_string())));
    }

    if let Some(name) = &c.name {
        lines.push(Line::new(LineKind::Title, name.clone()));
    }
    if let Some(job_title) = &c.job_title {
        lines.push(Line::new(LineKind::Subtitle, job_title.clone()));
    }

    let mut contact_items = contact_parts(c);
    contact_items.extend(c.linkedin.iter().cloned());
    contact_items.extend(c.github.iter().cloned());
    if !contact_items.is_empty() {
        html.push_str("<section>\n<h3>Contact</h3>\n<ul>\n");
        lines.push(Line::new(LineKind::Heading, "Contact"));
        for item in &contact_items {
            html.push_str(&format!("<li>{}</li>\n", esc(item)));
            lines.push(Line::new(LineKind::Body, item.clone()));
        }
        html.push_str("</ul>\n</section>\n");
    }

    let skills = c.skills_list();
    if !skills.is_empty() {
        html.push_str("<section>\n<h3>Skills</h3>\n");
        lines.push(Line::new(LineKind::Heading, "Skills"));
        for skill in &skills {
            html.push_str(&format!(
                "<div class=\"skill\">{}<div class=\"bar\"><div class=\"fill\" style=\"width:85%\"></div></div></div>\n",
                esc(skill)
            ));
            lines.push(Line::new(LineKind::Body, skill.to_string()));
        }
        html.push_str("</section>\n");
    }
    html.push_str("</aside>\n<main>\n");

    if let Some(name) = &c.name {
        html.push_str(&format!("<h1>{}</h1>\n", esc(name)));
    }
    if let Some(job_title) = &c.job_title {
        html.push_str(&format!("<h2>{}</h2>\n", esc(job_title)));
    }

    if let Some(summary) = &c.summary {
        html.push_str(&format!(
            "<section>\n<h3>Professional Summary</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(summary)
        ));
        lines.push(Line::new(LineKind::Heading, "Professional Summary"));
        push_body_lines(&mut lines, summary);
    }

    if let Some(experience) = &c.experience {
        html.push_str(&format!(
            "<section>\n<h3>Work Experience</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(experience)
        ));
        lines.push(Line::new(LineKind::Heading, "Work Experience"));
        push_body_lines(&mut lines, experience);
    }

    if let Some(education) = &c.education {
        html.push_str(&format!(
            "<section>\n<h3>Education</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(education)
        ));
        lines.push(Line::new(LineKind::Heading, "Education"));
        push_body_lines(&mut lines, education);
    }

    html.push_str("</main>\n</div>\n");
    (html, lines)
}

/// Card sections with tagged skills.
pub(super) fn creative(c: &ResumeContent) -> (String, Vec<Line>) {
    let mut html = String::from("<div class=\"resume creative\">\n<header>\n");
    let mut lines = Vec::new();

    if let Some(name) = &c.name {
        html.push_str(&format!("<h1 class=\"accent\">{}</h1>\n", esc(name)));
        lines.push(Line::new(LineKind::Title, name.clone()));
    }
    if let Some(job_title) = &c.job_title {
        html.push_str(&format!("<h2>{}</h2>\n", esc(job_title)));
        lines.push(Line::new(LineKind::Subtitle, job_title.clone()));
    }

    let mut chips: Vec<String> = contact_parts(c);
    chips.extend(c.linkedin.iter().cloned());
    chips.extend(c.github.iter().cloned());
    if !chips.is_empty() {
        html.push_str("<p class=\"chips\">");
        for chip in &chips {
            html.push_str(&format!("<span class=\"chip\">{}</span>", esc(chip)));
        }
        html.push_str("</p>\n");
        lines.push(Line::new(LineKind::Body, chips.join("  ")));
    }
    html.push_str("</header>\n");

    if let Some(summary) = &c.summary {
        html.push_str(&format!(
            "<section class=\"card\">\n<h3>&#10024; About Me</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(summary)
        ));
        lines.push(Line::new(LineKind::Heading, "About Me"));
        push_body_lines(&mut lines, summary);
    }

    let skills = c.skills_list();
    if !skills.is_empty() {
        html.push_str("<section class=\"card\">\n<h3>&#127919; Skills</h3>\n<p class=\"tags\">");
        lines.push(Line::new(LineKind::Heading, "Skills"));
        for skill in &skills {
            html.push_str(&format!("<span class=\"tag\">{}</span>", esc(skill)));
        }
        html.push_str("</p>\n</section>\n");
        lines.push(Line::new(LineKind::Body, skills.join("  ")));
    }

    if let Some(experience) = &c.experience {
        html.push_str(&format!(
            "<section class=\"card\">\n<h3>&#128188; Experience</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(experience)
        ));
        lines.push(Line::new(LineKind::Heading, "Experience"));
        push_body_lines(&mut lines, experience);
    }

    if let Some(education) = &c.education {
        html.push_str(&format!(
            "<section class=\"card\">\n<h3>&#127891; Education</h3>\n<p>{}</p>\n</section>\n",
            multiline_html(education)
        ));
        lines.push(Line::new(LineKind::Heading, "Education"));
        push_body_lines(&mut lines, education);
    }

    html.push_str("</div>\n");
    (html, lines)
}
