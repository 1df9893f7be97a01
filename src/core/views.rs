// Markup for each page, plus the navigation bar and footer.
//
// Views are plain functions from content to HTML. Anything that navigates
// is a `data-nav` element; the router owns the single click handler that
// turns those into `PageStore::navigate` calls.

use crate::constants::{FORM_EMAIL_ERROR_ID, FORM_ID, FORM_STATUS_ID, HERO_ID};
use crate::core::content::{
    ABOUT_STORY, GALLERY, JOIN_BENEFITS, JOIN_REQUIREMENTS, MISSION_VALUES, POSTS, PROJECTS,
    SPONSORS, TEAM, YEARS_OF_STUDY,
};
use crate::core::form::REQUIRED_EMAIL_DOMAIN;
use crate::core::page::{Page, Route};
use std::fmt::Write;

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Markup for `<main>`. Unknown routes render nothing.
pub fn render(route: Route) -> Option<String> {
    route.map(render_page)
}

pub fn render_page(page: Page) -> String {
    match page {
        Page::Home => home(),
        Page::About => about(),
        Page::Projects => projects(),
        Page::Team => team(),
        Page::Join => join(),
        Page::Sponsors => sponsors(),
        Page::Gallery => gallery(),
        Page::Blog => blog(),
    }
}

fn nav_button(target: Page, class: &str, label: &str) -> String {
    format!(
        r#"<button type="button" class="{}" data-nav="{}">{}</button>"#,
        class,
        target.id(),
        escape(label)
    )
}

fn page_header(kicker: &str, title: &str, accent: &str, lead: &str) -> String {
    format!(
        r#"<header class="page-hero"><span class="kicker">{}</span><h1>{} <span class="accent">{}</span></h1><p class="lead">{}</p></header>"#,
        escape(kicker),
        escape(title),
        escape(accent),
        escape(lead)
    )
}

fn bullet_list(items: &[&str], class: &str) -> String {
    let mut out = format!(r#"<ul class="{}">"#, class);
    for item in items {
        _ = write!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>");
    out
}

pub fn nav(current: Route) -> String {
    let mut out = String::from(
        r#"<div class="brand" data-nav="home"><span>EXO</span><span class="accent">TU</span></div><ul class="nav-links">"#,
    );
    for page in Page::ALL {
        let class = if current == Some(page) {
            "nav-link active"
        } else {
            "nav-link"
        };
        _ = write!(out, "<li>{}</li>", nav_button(page, class, page.label()));
    }
    out.push_str("</ul>");
    out
}

pub fn footer() -> String {
    let mut out = String::from(
        r#"<div class="footer-brand"><span>EXO</span><span class="accent">TU</span><p>Engineering the future of human potential through innovative powered exoskeleton technology.</p></div><ul class="footer-links">"#,
    );
    for page in [Page::About, Page::Projects, Page::Team, Page::Gallery] {
        _ = write!(out, "<li>{}</li>", nav_button(page, "footer-link", page.label()));
    }
    out.push_str("</ul>");
    out
}

fn home() -> String {
    let mut out = format!(r#"<section id="{}" class="hero"></section>"#, HERO_ID);
    out.push_str(
        r#"<section class="mission"><h2>Redefining Human Capability</h2><p>EXOTU is a student-led engineering organization dedicated to designing, building, and testing functional powered exoskeletons.</p><div class="values">"#,
    );
    for v in MISSION_VALUES {
        _ = write!(
            out,
            r#"<div class="value"><h3>{}</h3><p>{}</p></div>"#,
            escape(v.title),
            escape(v.description)
        );
    }
    out.push_str(r#"</div></section><section class="projects-preview"><h2>Current Projects</h2>"#);
    for p in PROJECTS {
        _ = write!(
            out,
            r#"<article class="project-card"><span class="category">{}</span><h3>{}</h3><p>{}</p><div class="progress" style="width:{}%"></div></article>"#,
            escape(p.category),
            escape(p.name),
            escape(p.description),
            p.progress.min(100)
        );
    }
    out.push_str(&nav_button(Page::Projects, "cta", "View all projects"));
    out.push_str("</section>");
    out
}

fn about() -> String {
    let mut out = page_header(
        "About EXOTU",
        "Pioneering the Next Generation of",
        "Human Augmentation",
        "A university-based organization dedicated to advancing powered exoskeleton technology through hands-on innovation.",
    );
    out.push_str(r#"<section class="story"><h2>Our Story</h2>"#);
    for para in ABOUT_STORY {
        _ = write!(out, "<p>{}</p>", escape(para));
    }
    out.push_str("</section>");
    out.push_str(&nav_button(Page::Join, "cta", "Join the Team"));
    out
}

fn projects() -> String {
    let mut out = page_header(
        "Our Projects",
        "Building the",
        "Future of Mobility",
        "From flagship full-body systems to focused assistive devices.",
    );
    for p in PROJECTS {
        _ = write!(
            out,
            r#"<article class="project-detail"><img src="{}" alt="{}"><span class="category">{}</span><h2>{}</h2><p>{}</p><p class="status">{} &middot; {}% complete</p>{}<p class="team">Teams: {}</p></article>"#,
            escape(p.image),
            escape(p.name),
            escape(p.category),
            escape(p.name),
            escape(p.description),
            escape(p.status),
            p.progress.min(100),
            bullet_list(p.specs, "specs"),
            escape(p.team)
        );
    }
    out
}

fn team() -> String {
    let mut out = page_header(
        "Our Team",
        "Meet the Minds Behind",
        "EXOTU",
        "Engineers and researchers from across the university.",
    );
    for section in TEAM {
        _ = write!(out, r#"<section class="team-section"><h2>{}</h2><div class="members">"#, escape(section.title));
        for m in section.members {
            _ = write!(
                out,
                r#"<div class="member"><h3>{}</h3><p class="role">{}</p><p class="dept">{}</p></div>"#,
                escape(m.name),
                escape(m.role),
                escape(m.department)
            );
        }
        out.push_str("</div></section>");
    }
    out.push_str(r#"<section class="team-cta"><h2>Want to Join Our Team?</h2>"#);
    out.push_str(&nav_button(Page::Join, "cta", "Apply Now"));
    out.push_str("</section>");
    out
}

fn join() -> String {
    let mut out = page_header(
        "Join EXOTU",
        "Be Part of Something",
        "Extraordinary",
        "No matter your background or experience level, there's a place for you at EXOTU.",
    );
    out.push_str(r#"<section class="join-info"><h2>Why Join EXOTU?</h2>"#);
    out.push_str(&bullet_list(JOIN_BENEFITS, "benefits"));
    out.push_str("<h2>What We're Looking For</h2>");
    out.push_str(&bullet_list(JOIN_REQUIREMENTS, "requirements"));
    out.push_str("</section>");

    let mut years = String::from(r#"<option value="">Select year</option>"#);
    for (value, label) in YEARS_OF_STUDY {
        _ = write!(years, r#"<option value="{}">{}</option>"#, value, escape(label));
    }
    _ = write!(
        out,
        r#"<section class="application"><h2>Application Form</h2><form id="{form}" novalidate>
<label>Full Name *<input type="text" name="name" required></label>
<label>Email Address *<input type="email" name="email" required placeholder="you{domain}"></label>
<p id="{email_err}" class="field-error" hidden></p>
<label>Major/Department *<input type="text" name="major" required></label>
<label>Year of Study *<select name="year" required>{years}</select></label>
<label>Areas of Interest *<textarea name="interests" rows="3" required></textarea></label>
<label>Relevant Experience (Optional)<textarea name="experience" rows="4"></textarea></label>
<button type="submit">Submit Application</button>
<p id="{status}" class="form-status" hidden></p>
</form></section>"#,
        form = FORM_ID,
        domain = REQUIRED_EMAIL_DOMAIN,
        email_err = FORM_EMAIL_ERROR_ID,
        years = years,
        status = FORM_STATUS_ID,
    );
    out
}

fn sponsors() -> String {
    let mut out = page_header(
        "Sponsors",
        "Powered by",
        "Our Partners",
        "Organizations that make our work possible.",
    );
    for (tier, names) in SPONSORS {
        _ = write!(out, r#"<section class="tier {}"><h2>{}</h2><div class="sponsor-grid">"#, tier.css_class(), tier.name());
        for name in names.iter() {
            _ = write!(out, r#"<div class="sponsor-card">{}</div>"#, escape(name));
        }
        out.push_str("</div></section>");
    }
    out
}

fn gallery() -> String {
    let mut out = page_header(
        "Gallery",
        "Inside the",
        "Lab",
        "Competitions, lab work, testing and team events.",
    );
    for cat in GALLERY {
        _ = write!(out, r#"<section class="gallery-category"><h2>{}</h2><div class="gallery-grid">"#, escape(cat.category));
        for src in cat.images {
            let src = escape(src);
            _ = write!(
                out,
                r#"<img src="{src}" alt="{alt}" data-lightbox="{src}" loading="lazy">"#,
                src = src,
                alt = escape(cat.category)
            );
        }
        out.push_str("</div></section>");
    }
    out
}

fn blog() -> String {
    let mut out = page_header(
        "Blog",
        "News &",
        "Research Updates",
        "Milestones, competition results and research notes from the team.",
    );
    for post in POSTS {
        _ = write!(
            out,
            r#"<article class="post"><span class="category">{}</span><h2>{}</h2><p class="meta">{} &middot; {} &middot; {}</p><p>{}</p></article>"#,
            escape(post.category),
            escape(post.title),
            escape(post.author),
            escape(post.date),
            escape(post.read_time),
            escape(post.excerpt)
        );
    }
    out
}
